use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_APP: Color32 = Color32::from_rgb(246, 246, 243);
pub const BG_STRIP: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_STATUS: Color32 = Color32::from_rgb(236, 236, 232);
pub const BG_HOVER_UNIT: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 12);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(214, 214, 208);
pub const ACCENT: Color32 = Color32::from_rgb(38, 110, 200);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(28, 28, 32);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 98, 108);
pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 152, 160);

/// Start/end markers and the band between them.
pub const MARKER: Color32 = Color32::from_rgb(220, 70, 50);
pub const RANGE_FILL: Color32 = Color32::from_rgba_premultiplied(30, 9, 6, 30);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const STRIP_HEIGHT: f32 = 72.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const TICK_SHORT: f32 = 8.0;
pub const TICK_LONG: f32 = 22.0;
pub const MARKER_WIDTH: f32 = 3.0;
pub const LABEL_INSET: f32 = 2.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_large() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_APP;
    visuals.window_fill = BG_STRIP;
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.window_rounding = Rounding::same(6.0);

    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(4.0);
    }
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
