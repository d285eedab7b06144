use std::time::Instant;

use egui::{Align2, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::input::RawEvent;
use crate::ui::theme;
use crate::widget::{Chronoslider, RenderFrame, RenderSurface};

/// egui-backed surface. Keeps the last frame the widget rendered and paints
/// it on the next pass.
#[derive(Debug, Default)]
pub struct StripSurface {
    width: f32,
    frame: Option<RenderFrame>,
}

impl StripSurface {
    pub fn new(width: f32) -> Self {
        Self { width, frame: None }
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn frame(&self) -> Option<&RenderFrame> {
        self.frame.as_ref()
    }
}

impl RenderSurface for StripSurface {
    fn strip_width(&self) -> f32 {
        self.width
    }

    fn render(&mut self, frame: &RenderFrame) {
        self.frame = Some(frame.clone());
    }
}

/// Lay out the strip, forward this pass's input to the widget and paint.
pub fn show_timeline_strip(timeline: &mut Chronoslider<StripSurface>, ui: &mut Ui) {
    let now = Instant::now();
    let size = Vec2::new(ui.available_width(), theme::STRIP_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

    timeline.surface_mut().set_width(rect.width());
    timeline.handle(&RawEvent::Resize { width: rect.width() }, now);

    let unit_width = timeline.options().unit_pixel_width;
    let (pressed, released, latest, delta, scroll) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.latest_pos(),
            i.pointer.delta(),
            i.raw_scroll_delta.y,
        )
    });

    if let Some(pos) = latest {
        if pressed && rect.contains(pos) {
            timeline.handle(&RawEvent::PointerDown { x: pos.x }, now);
        }
        if delta.x != 0.0 && timeline.is_dragging() {
            timeline.handle(&RawEvent::PointerMove { x: pos.x }, now);
        }
        if released {
            timeline.handle(&RawEvent::PointerUp { x: pos.x }, now);
        }
    }

    if response.clicked() {
        let unit = response
            .interact_pointer_pos()
            .and_then(|pos| unit_index_at(rect, unit_width, pos))
            .and_then(|index| timeline.units().get(index))
            .map(|unit| unit.date);
        timeline.handle(&RawEvent::Click { unit }, now);
    }

    if response.hovered() && scroll != 0.0 {
        // egui reports scroll-up as positive; the widget expects the opposite
        let suppress = timeline.handle(&RawEvent::Wheel { delta_y: -scroll }, now);
        if suppress {
            ui.ctx().input_mut(|i| {
                i.raw_scroll_delta = Vec2::ZERO;
                i.smooth_scroll_delta = Vec2::ZERO;
            });
        }
    }

    timeline.poll(now);
    if let Some(deadline) = timeline.pending_deadline() {
        ui.ctx()
            .request_repaint_after(deadline.saturating_duration_since(now));
    }

    let hovered = response
        .hover_pos()
        .and_then(|pos| unit_index_at(rect, unit_width, pos));
    if let Some(frame) = timeline.surface().frame() {
        paint_frame(ui.painter_at(rect), rect, frame, hovered);
    }
}

fn unit_index_at(rect: Rect, unit_width: f32, pos: Pos2) -> Option<usize> {
    if !rect.contains(pos) {
        return None;
    }
    Some(((pos.x - rect.left()) / unit_width).floor() as usize)
}

fn paint_frame(painter: egui::Painter, rect: Rect, frame: &RenderFrame, hovered: Option<usize>) {
    painter.rect_filled(rect, 0.0, theme::BG_STRIP);
    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    let unit_width = frame.unit_pixel_width;
    let baseline = rect.bottom() - 1.0;
    let unit_rect = |index: usize| {
        let left = rect.left() + index as f32 * unit_width;
        Rect::from_min_max(Pos2::new(left, rect.top()), Pos2::new(left + unit_width, baseline))
    };

    if let Some(index) = hovered.filter(|i| *i < frame.units.len()) {
        painter.rect_filled(unit_rect(index), 0.0, theme::BG_HOVER_UNIT);
    }

    // Band between the two bounds, clipped to what is on screen.
    if let Some(range) = frame.selection.range() {
        let inside: Vec<usize> = frame
            .units
            .iter()
            .enumerate()
            .filter(|(_, u)| u.date >= range.start_date && u.date <= range.end_date)
            .map(|(i, _)| i)
            .collect();
        if let (Some(first), Some(last)) = (inside.first(), inside.last()) {
            let band = unit_rect(*first).union(unit_rect(*last));
            painter.rect_filled(band, 0.0, theme::RANGE_FILL);
        }
    }

    for (index, unit) in frame.units.iter().enumerate() {
        let cell = unit_rect(index);
        let long = unit.label.is_long();
        let tick = if long { theme::TICK_LONG } else { theme::TICK_SHORT };
        painter.line_segment(
            [Pos2::new(cell.left(), baseline - tick), Pos2::new(cell.left(), baseline)],
            Stroke::new(if long { 1.5 } else { 1.0 }, frame.color),
        );

        if long {
            let x = cell.left() + theme::LABEL_INSET;
            painter.text(
                Pos2::new(x, rect.top() + 10.0),
                Align2::LEFT_CENTER,
                &unit.label.small_text,
                theme::font_small(),
                theme::TEXT_SECONDARY,
            );
            painter.text(
                Pos2::new(x, rect.top() + 26.0),
                Align2::LEFT_CENTER,
                &unit.label.large_text,
                theme::font_large(),
                frame.color,
            );
        }

        if frame.selection.is_bound(unit.date) {
            painter.rect_filled(
                Rect::from_center_size(
                    Pos2::new(cell.center().x, cell.bottom() - theme::TICK_LONG / 2.0),
                    Vec2::new(theme::MARKER_WIDTH, theme::TICK_LONG),
                ),
                1.0,
                theme::MARKER,
            );
        }
    }
}
