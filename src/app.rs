use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::error::{Result, TimelineError};
use crate::model::{PanDirection, Resolution, SelectedRange, TimelineOptions, ZoomDirection};
use crate::ui;
use crate::ui::StripSurface;
use crate::widget::Chronoslider;

/// Width the strip assumes until the first layout pass.
const INITIAL_STRIP_WIDTH: f32 = 960.0;

/// Demo host: a single timeline plus a status bar showing the picked range.
pub struct ChronosliderApp {
    timeline: Chronoslider<StripSurface>,
    ranges: Receiver<SelectedRange>,
    options_path: Option<PathBuf>,

    // Dialog state
    pub show_jump: bool,
    pub show_about: bool,
    pub jump_date: NaiveDate,

    pub status_message: String,
}

impl ChronosliderApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        options: TimelineOptions,
        options_path: Option<PathBuf>,
    ) -> Result<Self> {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        ui::theme::apply_theme(&cc.egui_ctx);

        let jump_date = options.start_date.date();
        let mut timeline = Chronoslider::new(StripSurface::new(INITIAL_STRIP_WIDTH), options)?;

        let (tx, ranges) = mpsc::channel();
        let repaint = cc.egui_ctx.clone();
        timeline.on_range_selected(move |range| {
            if tx.send(range).is_ok() {
                repaint.request_repaint();
            }
        });

        Ok(Self {
            timeline,
            ranges,
            options_path,
            show_jump: false,
            show_about: false,
            jump_date,
            status_message: "Ready".to_string(),
        })
    }

    // --- Navigation ---

    pub fn pan(&mut self, direction: PanDirection) {
        self.timeline.pan(direction);
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        if !self.timeline.zoom(direction, None) {
            self.status_message = format!("Cannot zoom {direction} any further");
        }
    }

    pub fn jump_to_picked_date(&mut self) {
        self.timeline.jump_to(self.jump_date.and_time(NaiveTime::MIN));
        self.status_message = format!("Centered on {}", self.jump_date);
    }

    pub fn resolution(&self) -> Resolution {
        self.timeline.resolution()
    }

    // --- Selection ---

    pub fn clear_start(&mut self) {
        self.timeline.clear_start_date();
    }

    pub fn clear_end(&mut self) {
        self.timeline.clear_end_date();
    }

    // --- Options file ---

    pub fn save_options(&mut self) {
        let result = match &self.options_path {
            Some(path) => crate::io::save_options(self.timeline.options(), path).map(|()| path.clone()),
            None => Err(TimelineError::NoConfigDir),
        };
        match result {
            Ok(path) => self.status_message = format!("Options saved to {}", path.display()),
            Err(e) => {
                warn!("failed to save options: {e}");
                self.status_message = format!("Error saving options: {e}");
            }
        }
    }

    pub fn open_config_folder(&mut self) {
        let Some(dir) = self.options_path.as_ref().and_then(|p| p.parent()) else {
            self.status_message = "No config folder available".to_string();
            return;
        };
        if let Err(e) = std::fs::create_dir_all(dir).and_then(|()| open::that(dir)) {
            warn!("failed to open {}: {e}", dir.display());
            self.status_message = format!("Could not open {}: {e}", dir.display());
        }
    }

    fn drain_ranges(&mut self) {
        while let Ok(range) = self.ranges.try_recv() {
            info!(start = %range.start_date, end = %range.end_date, "range selected");
            self.status_message = format!(
                "Range selected at {}",
                chrono::Local::now().format("%H:%M:%S")
            );
        }
    }

    fn range_text(&self) -> String {
        let fmt = |date: chrono::NaiveDateTime| date.format("%Y-%m-%d %H:%M").to_string();
        match (self.timeline.start_date(), self.timeline.end_date()) {
            (Some(start), Some(end)) => format!("Selected Range: {} to {}", fmt(start), fmt(end)),
            (Some(start), None) => format!("Start: {}", fmt(start)),
            (None, Some(end)) => format!("End: {}", fmt(end)),
            (None, None) => "No range selected".to_string(),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (left, right, zoom_in, zoom_out) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
            )
        });
        if left {
            self.pan(PanDirection::Left);
        }
        if right {
            self.pan(PanDirection::Right);
        }
        if zoom_in {
            self.zoom(ZoomDirection::In);
        }
        if zoom_out {
            self.zoom(ZoomDirection::Out);
        }
    }
}

impl eframe::App for ChronosliderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.drain_ranges();

        // Top panel: menus and icon toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_menu_bar(self, ui);
            ui.add_space(2.0);
            ui::toolbar::show_toolbar(self, ui);
            ui.add_space(2.0);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_STATUS)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(self.range_text())
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&self.status_message)
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: the strip
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui::show_timeline_strip(&mut self.timeline, ui);
        });

        if self.show_jump {
            ui::dialogs::show_jump_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
