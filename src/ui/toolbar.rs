use crate::app::ChronosliderApp;
use crate::model::{PanDirection, ZoomDirection};
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the menu bar.
pub fn show_menu_bar(app: &mut ChronosliderApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  Navigate  ").font(theme::font_menu()), |ui| {
            if ui.button("  Pan Left        ←").clicked() {
                app.pan(PanDirection::Left);
                ui.close_menu();
            }
            if ui.button("  Pan Right      →").clicked() {
                app.pan(PanDirection::Right);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Zoom In         +").clicked() {
                app.zoom(ZoomDirection::In);
                ui.close_menu();
            }
            if ui.button("  Zoom Out       -").clicked() {
                app.zoom(ZoomDirection::Out);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Jump to Date...").clicked() {
                app.show_jump = true;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Selection  ").font(theme::font_menu()), |ui| {
            if ui.button("  Clear Start").clicked() {
                app.clear_start();
                ui.close_menu();
            }
            if ui.button("  Clear End").clicked() {
                app.clear_end();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Settings  ").font(theme::font_menu()), |ui| {
            if ui.button("  Save Options").clicked() {
                app.save_options();
                ui.close_menu();
            }
            if ui.button("  Open Config Folder").clicked() {
                app.open_config_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });
    });
}

/// Icon buttons above the strip plus the current resolution.
pub fn show_toolbar(app: &mut ChronosliderApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if ui.button(icons::CARET_LEFT).on_hover_text("Pan left").clicked() {
            app.pan(PanDirection::Left);
        }
        if ui.button(icons::CARET_RIGHT).on_hover_text("Pan right").clicked() {
            app.pan(PanDirection::Right);
        }
        ui.separator();
        if ui.button(icons::MAGNIFYING_GLASS_PLUS).on_hover_text("Zoom in").clicked() {
            app.zoom(ZoomDirection::In);
        }
        if ui.button(icons::MAGNIFYING_GLASS_MINUS).on_hover_text("Zoom out").clicked() {
            app.zoom(ZoomDirection::Out);
        }
        ui.separator();
        if ui.button(icons::CALENDAR_BLANK).on_hover_text("Jump to date").clicked() {
            app.show_jump = true;
        }
        if ui.button(icons::X).on_hover_text("Clear selection").clicked() {
            app.clear_start();
            app.clear_end();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("Resolution: {}", app.resolution()))
                    .size(11.0)
                    .color(theme::TEXT_SECONDARY),
            );
        });
    });
}
