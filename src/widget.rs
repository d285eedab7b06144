//! The timeline widget: owns navigation, selection and input state and
//! pushes a fresh [`RenderFrame`] to its surface after every change.

use std::time::Instant;

use chrono::NaiveDateTime;
use egui::Color32;
use tracing::{debug, info};

use crate::error::{Result, TimelineError};
use crate::input::{DisambiguatorConfig, InputDisambiguator, Intent, RawEvent};
use crate::model::{
    generate_with, DefaultLabels, LabelFormatter, NavigationEngine, NavigationState, PanDirection,
    RangeSelection, RangeSelector, Resolution, SelectedRange, TimeUnit, TimelineOptions,
    ZoomDirection,
};

/// Where the widget draws. Implemented by the egui strip and by test doubles.
pub trait RenderSurface {
    /// Current pixel width of the unit strip.
    fn strip_width(&self) -> f32;

    /// Called after every state change and every resize.
    fn render(&mut self, frame: &RenderFrame);
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Units in display order.
    pub units: Vec<TimeUnit>,
    pub selection: RangeSelection,
    pub resolution: Resolution,
    pub unit_pixel_width: f32,
    pub color: Color32,
}

pub type RangeCallback = Box<dyn FnMut(SelectedRange)>;

pub struct Chronoslider<S: RenderSurface> {
    surface: S,
    options: TimelineOptions,
    navigation: NavigationEngine,
    selector: RangeSelector,
    input: InputDisambiguator,
    labels: Box<dyn LabelFormatter>,
    on_range: Option<RangeCallback>,
    units: Vec<TimeUnit>,
}

impl<S: RenderSurface> Chronoslider<S> {
    /// Build a widget over `surface` and render it once.
    pub fn new(surface: S, options: TimelineOptions) -> Result<Self> {
        let width = surface.strip_width();
        if !width.is_finite() || width < 0.0 {
            return Err(TimelineError::InvalidContainer(format!(
                "surface reports unusable width {width}"
            )));
        }
        options.validate()?;

        let navigation =
            NavigationEngine::new(options.resolution, options.start_date, options.ladder()?)?;
        let input = InputDisambiguator::new(DisambiguatorConfig {
            double_click_window: options.double_click_window(),
            drag_threshold: options.unit_pixel_width,
        });

        let mut widget = Self {
            surface,
            options,
            navigation,
            selector: RangeSelector::new(),
            input,
            labels: Box::new(DefaultLabels),
            on_range: None,
            units: Vec::new(),
        };
        info!(
            resolution = %widget.navigation.resolution(),
            anchor = %widget.navigation.anchor(),
            width,
            "timeline created"
        );
        widget.render();
        Ok(widget)
    }

    /// Replace the label formatter and re-render.
    pub fn with_labels(mut self, labels: impl LabelFormatter + 'static) -> Self {
        self.labels = Box::new(labels);
        self.render();
        self
    }

    // -- Input -------------------------------------------------------------

    /// Feed one raw event. Returns whether the host should suppress the
    /// event's default action.
    pub fn handle(&mut self, event: &RawEvent, now: Instant) -> bool {
        let out = self.input.process(event, &self.units, now);
        for intent in out.intents {
            self.apply(intent);
        }
        out.suppress_default
    }

    /// Fire a held-back single click whose window has passed.
    pub fn poll(&mut self, now: Instant) {
        if let Some(intent) = self.input.poll(now) {
            self.apply(intent);
        }
    }

    fn apply(&mut self, intent: Intent) {
        debug!(?intent, "apply intent");
        match intent {
            Intent::Pan(direction) => {
                self.pan(direction);
            }
            Intent::ZoomIn(hover) => {
                self.zoom(ZoomDirection::In, hover);
            }
            Intent::ZoomOut => {
                self.zoom(ZoomDirection::Out, None);
            }
            Intent::UnitClicked(date) => self.select_unit(date),
            Intent::UnitDoubleClicked(date) => {
                self.zoom(ZoomDirection::In, Some(date));
            }
            Intent::Rerender => self.render(),
        }
    }

    fn select_unit(&mut self, date: NaiveDateTime) {
        let change = self.selector.select_unit(date);
        if change.changed {
            self.render();
        }
        if let (Some(range), Some(callback)) = (change.completed, self.on_range.as_mut()) {
            callback(range);
        }
    }

    // -- Navigation --------------------------------------------------------

    /// Move one unit and re-render. Returns whether the anchor moved; it stays
    /// put only at the edge of the representable calendar.
    pub fn pan(&mut self, direction: PanDirection) -> bool {
        let moved = self.navigation.pan(direction);
        self.render();
        moved
    }

    /// Step the resolution. Returns `false` at either end of the ladder.
    pub fn zoom(&mut self, direction: ZoomDirection, hover: Option<NaiveDateTime>) -> bool {
        let visible = self.visible_unit_count();
        let zoomed = self.navigation.zoom(direction, hover, visible);
        if zoomed {
            self.render();
        }
        zoomed
    }

    /// Center the view on `date` without changing resolution.
    pub fn jump_to(&mut self, date: NaiveDateTime) {
        let visible = self.visible_unit_count();
        self.navigation.jump_to(date, visible);
        self.render();
    }

    pub fn navigation_state(&self) -> NavigationState {
        self.navigation.state()
    }

    pub fn resolution(&self) -> Resolution {
        self.navigation.resolution()
    }

    // -- Selection ---------------------------------------------------------

    pub fn selection(&self) -> RangeSelection {
        self.selector.selection()
    }

    pub fn start_date(&self) -> Option<NaiveDateTime> {
        self.selector.start()
    }

    pub fn set_start_date(&mut self, date: NaiveDateTime) {
        self.selector.set_start(date);
        self.render();
    }

    pub fn clear_start_date(&mut self) {
        self.selector.clear_start();
        self.render();
    }

    pub fn end_date(&self) -> Option<NaiveDateTime> {
        self.selector.end()
    }

    pub fn set_end_date(&mut self, date: NaiveDateTime) {
        self.selector.set_end(date);
        self.render();
    }

    pub fn clear_end_date(&mut self) {
        self.selector.clear_end();
        self.render();
    }

    /// Register the callback for completed ranges, replacing any earlier one.
    pub fn on_range_selected(&mut self, callback: impl FnMut(SelectedRange) + 'static) {
        self.on_range = Some(Box::new(callback));
    }

    // -- Rendering ---------------------------------------------------------

    /// Whole units that fit in the surface's current width.
    pub fn visible_unit_count(&self) -> usize {
        let count = (self.surface.strip_width() / self.options.unit_pixel_width).floor();
        // NaN and negatives saturate to zero
        count as usize
    }

    /// Regenerate the visible units and hand them to the surface.
    pub fn render(&mut self) {
        let NavigationState { resolution, anchor } = self.navigation.state();
        self.units = generate_with(
            anchor,
            resolution,
            self.visible_unit_count(),
            self.labels.as_ref(),
        );
        let frame = RenderFrame {
            units: self.units.clone(),
            selection: self.selector.selection(),
            resolution,
            unit_pixel_width: self.options.unit_pixel_width,
            color: self.options.color,
        };
        self.surface.render(&frame);
    }

    /// Units of the most recent render.
    pub fn units(&self) -> &[TimeUnit] {
        &self.units
    }

    pub fn options(&self) -> &TimelineOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// When [`poll`](Self::poll) next has work to do.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.input.pending_deadline()
    }

    /// Tear the widget down. No callback fires after this returns.
    pub fn destroy(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.input.cancel_pending() {
            debug!("pending click canceled on teardown");
        }
        self.input.reset();
        self.on_range = None;
    }
}

impl<S: RenderSurface> Drop for Chronoslider<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
