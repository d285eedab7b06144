use crate::app::ChronosliderApp;
use crate::ui::theme;
use egui::{Color32, Context, RichText, Window};

/// Render the "Jump to Date" dialog.
pub fn show_jump_dialog(app: &mut ChronosliderApp, ctx: &Context) {
    let mut should_close = false;
    Window::new(RichText::new("Jump to Date").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([260.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Date").color(theme::TEXT_SECONDARY));
                ui.add(egui_extras::DatePickerButton::new(&mut app.jump_date).id_salt("dlg_dp_jump"));
            });
            ui.label(
                RichText::new("The view is centered on this date at the current resolution.")
                    .small()
                    .color(theme::TEXT_DIM),
            );

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let go = egui::Button::new(RichText::new("Go").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], go).clicked() {
                    app.jump_to_picked_date();
                    should_close = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_jump = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut ChronosliderApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 200.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Chronoslider").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("Drag to pan, scroll or double-click to zoom.");
                ui.label("Click two units to pick a range.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
