use bevy_egui::egui;

use crate::model::{parse_hex_rgb, Theme};

/// Get a scaled font size with minimum of 12
pub fn scaled_font(base_size: f32, scale: f32) -> f32 {
    (base_size.max(12.0) * scale).max(12.0)
}

/// Get a scaled margin/spacing value
pub fn scaled_margin(base_size: f32, scale: f32) -> f32 {
    base_size * scale
}

/// Convert a `#RRGGBB` string to an egui color (gray if malformed)
pub fn hex_color(hex: &str) -> egui::Color32 {
    parse_hex_rgb(hex)
        .map(|(r, g, b)| egui::Color32::from_rgb(r, g, b))
        .unwrap_or(egui::Color32::GRAY)
}

/// Same color with a fixed alpha, like appending `22` to a CSS hex color
pub fn hex_color_alpha(hex: &str, alpha: u8) -> egui::Color32 {
    let c = hex_color(hex);
    egui::Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha)
}

/// Whether a theme wants dark base visuals
pub fn is_dark_background(hex: &str) -> bool {
    parse_hex_rgb(hex)
        .map(|(r, g, b)| (r as u32 + g as u32 + b as u32) < 384)
        .unwrap_or(false)
}

/// Section title with a short accent underline
pub fn section_heading(ui: &mut egui::Ui, title: &str, theme: &Theme, ui_scale: f32) {
    let response = ui.label(
        egui::RichText::new(title)
            .size(scaled_font(17.0, ui_scale))
            .strong()
            .color(hex_color(theme.text)),
    );
    let y = response.rect.max.y + 2.0;
    let x = response.rect.min.x;
    ui.painter().line_segment(
        [egui::pos2(x, y), egui::pos2(x + scaled_margin(64.0, ui_scale), y)],
        egui::Stroke::new(2.0, hex_color(theme.primary)),
    );
    ui.add_space(scaled_margin(8.0, ui_scale));
}

/// Round palette swatch; selected swatches get a ring in the theme color
pub fn color_swatch(
    ui: &mut egui::Ui,
    color: egui::Color32,
    selected: bool,
    ring: egui::Color32,
    ui_scale: f32,
) -> egui::Response {
    let size = scaled_margin(36.0, ui_scale);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let center = rect.center();
        let radius = size / 2.0 - 3.0;
        let radius = if response.hovered() { radius + 1.0 } else { radius };
        ui.painter().circle_filled(center, radius, color);
        // Keeps white visible on light themes
        ui.painter()
            .circle_stroke(center, radius, egui::Stroke::new(1.0, egui::Color32::from_gray(160)));
        if selected {
            ui.painter()
                .circle_stroke(center, radius + 2.5, egui::Stroke::new(2.5, ring));
        }
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Pill-shaped choice button; the selected one is filled with the theme primary
pub fn option_button(
    ui: &mut egui::Ui,
    selected: bool,
    text: impl Into<String>,
    theme: &Theme,
    ui_scale: f32,
) -> egui::Response {
    let text = text.into();
    let padding = egui::vec2(scaled_margin(16.0, ui_scale), scaled_margin(8.0, ui_scale));

    let text_color = if selected {
        hex_color(theme.background)
    } else {
        hex_color(theme.text)
    };

    let galley = ui.painter().layout_no_wrap(
        text,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
        text_color,
    );

    let desired_size = galley.size() + padding * 2.0;
    let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let bg = if selected {
            hex_color(theme.primary)
        } else if response.hovered() {
            hex_color_alpha(theme.primary, 0x33)
        } else {
            hex_color(theme.background)
        };
        let rounding = egui::Rounding::same(scaled_margin(8.0, ui_scale));
        ui.painter().rect_filled(rect, rounding, bg);
        ui.painter()
            .rect_stroke(rect, rounding, egui::Stroke::new(1.0, hex_color(theme.primary)));
        ui.painter().galley(rect.min + padding, galley, text_color);
    }

    response
}
