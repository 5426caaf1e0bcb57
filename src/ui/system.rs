use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::model::Theme;
use crate::state::{CustomizerState, Layout, DEFAULT_PANEL_MARGIN};
use crate::systems::PendingReads;
use crate::ui::canvas::{ensure_overlay_texture, render_preview};
use crate::ui::controls::render_controls;
use crate::ui::dialogs::render_dialogs;
use crate::ui::widgets::{hex_color, hex_color_alpha, is_dark_background, scaled_font, scaled_margin};

const CONTROLS_PANEL_WIDTH: f32 = 440.0;
/// Preview card aspect ratio (width / height)
const PREVIEW_ASPECT: f32 = 4.0 / 5.0;

pub fn ui_system(
    mut contexts: EguiContexts,
    mut state: ResMut<CustomizerState>,
    mut reads: ResMut<PendingReads>,
) {
    let ctx = contexts.ctx_mut();
    let state: &mut CustomizerState = &mut state;
    let reads: &mut PendingReads = &mut reads;

    apply_theme_style(ctx, state.theme(), state.config.ui_scale);
    handle_ui_scale_shortcuts(ctx, state);
    ensure_overlay_texture(ctx, state);

    // Dialogs (rendered first so they appear on top)
    render_dialogs(ctx, state, reads);

    let ui_scale = state.config.ui_scale;
    let margin = scaled_margin(DEFAULT_PANEL_MARGIN, ui_scale);
    let theme = state.theme();
    let panel_frame = egui::Frame::none()
        .fill(hex_color(theme.background))
        .inner_margin(egui::Margin::same(margin));

    egui::TopBottomPanel::top("header")
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("T-Shirt Customizer")
                        .strong()
                        .color(hex_color(theme.primary)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Theme: {}  (Alt+Q to switch)", theme.name))
                            .size(scaled_font(12.0, ui_scale))
                            .color(hex_color_alpha(theme.text, 0xb3)),
                    );
                });
            });
        });

    match state.layout() {
        Layout::TwoColumn => {
            egui::SidePanel::right("controls")
                .frame(panel_frame)
                .default_width(scaled_margin(CONTROLS_PANEL_WIDTH, ui_scale))
                .min_width(scaled_margin(320.0, ui_scale))
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        render_controls(ui, state, reads);
                    });
                });

            egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
                let available = ui.available_size();
                let size = fit_aspect(available, PREVIEW_ASPECT);
                ui.vertical_centered(|ui| {
                    render_preview(ui, state, size);
                    preview_actions(ui, state);
                });
            });
        }
        Layout::SingleColumn => {
            egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let width = ui.available_width();
                    let size = egui::vec2(width, width / PREVIEW_ASPECT);
                    render_preview(ui, state, size);
                    preview_actions(ui, state);
                    ui.add_space(margin * 2.0);
                    render_controls(ui, state, reads);
                });
            });
        }
    }

    if state.tooltip_visible() {
        render_theme_tooltip(ctx, theme, ui_scale);
    }
}

fn preview_actions(ui: &mut egui::Ui, state: &CustomizerState) {
    if ui
        .button("Copy SVG")
        .on_hover_text("Copy the preview as SVG markup")
        .clicked()
    {
        let svg = state.preview().to_svg();
        ui.ctx().output_mut(|o| o.copied_text = svg);
        info!("Copied preview SVG to clipboard");
    }
}

fn render_theme_tooltip(ctx: &egui::Context, theme: &Theme, ui_scale: f32) {
    egui::Area::new(egui::Id::new("theme_tooltip"))
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(hex_color(theme.primary))
                .rounding(egui::Rounding::same(scaled_margin(8.0, ui_scale)))
                .inner_margin(egui::Margin::same(scaled_margin(16.0, ui_scale)))
                .shadow(egui::epaint::Shadow {
                    offset: egui::vec2(0.0, 4.0),
                    blur: 12.0,
                    spread: 0.0,
                    color: egui::Color32::from_black_alpha(60),
                })
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!("Theme changed to {}!", theme.name))
                            .size(scaled_font(14.0, ui_scale))
                            .color(hex_color(theme.background)),
                    );
                });
        });
}

/// Largest size with the given aspect ratio that fits in `available`
fn fit_aspect(available: egui::Vec2, aspect: f32) -> egui::Vec2 {
    let width = available.x.min(available.y * aspect);
    egui::vec2(width, width / aspect)
}

/// Rebuild egui visuals and text sizes from the active theme
fn apply_theme_style(ctx: &egui::Context, theme: &Theme, ui_scale: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = if is_dark_background(theme.background) {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    style.visuals.panel_fill = hex_color(theme.background);
    style.visuals.window_fill = hex_color(theme.secondary);
    style.visuals.extreme_bg_color = hex_color(theme.background);
    style.visuals.override_text_color = Some(hex_color(theme.text));
    style.visuals.hyperlink_color = hex_color(theme.primary);
    style.visuals.selection.bg_fill = hex_color_alpha(theme.primary, 0x66);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, hex_color(theme.primary));
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, hex_color(theme.primary));

    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(scaled_font(22.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(scaled_font(14.0, ui_scale)),
    );
    style.spacing.icon_width = scaled_margin(14.0, ui_scale);
    style.spacing.icon_width_inner = scaled_margin(8.0, ui_scale);
    style.spacing.icon_spacing = scaled_margin(4.0, ui_scale);
    style.spacing.button_padding = egui::vec2(scaled_margin(10.0, ui_scale), scaled_margin(4.0, ui_scale));
    ctx.set_style(style);
}

/// Ctrl+Plus/Minus/0 adjust the UI scale and persist it
fn handle_ui_scale_shortcuts(ctx: &egui::Context, state: &mut CustomizerState) {
    // Plus requires Shift on most keyboards (Shift+=), Minus and 0 do not
    let increase_pressed = ctx.input_mut(|i| {
        i.consume_key(egui::Modifiers::COMMAND, egui::Key::Plus)
            || i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Equals)
    });
    let decrease_pressed = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Minus));
    let reset_pressed = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Num0));

    let changed = if increase_pressed {
        state.config.adjust_ui_scale(0.25)
    } else if decrease_pressed {
        state.config.adjust_ui_scale(-0.25)
    } else if reset_pressed {
        state.config.reset_ui_scale()
    } else {
        false
    };
    if changed {
        debug!("UI scale set to {}", state.config.ui_scale);
        state.config.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_aspect() {
        let tall = fit_aspect(egui::vec2(400.0, 1000.0), PREVIEW_ASPECT);
        assert_eq!(tall, egui::vec2(400.0, 500.0));
        let wide = fit_aspect(egui::vec2(1000.0, 500.0), PREVIEW_ASPECT);
        assert_eq!(wide, egui::vec2(400.0, 500.0));
    }
}
