use bevy_egui::egui;

use crate::file::{has_native_picker, pick_image_file, IncomingFile};
use crate::model::{
    Build, FieldUpdate, ShirtColor, Theme, HEIGHT_RANGE_CM, MAX_SHIRT_TEXT_CHARS,
    MAX_SHIRT_TEXT_LINES, WEIGHT_RANGE_KG,
};
use crate::state::{CustomizerState, OverlayTexture};
use crate::systems::PendingReads;
use crate::ui::widgets::{
    color_swatch, hex_color, hex_color_alpha, option_button, scaled_font, scaled_margin,
    section_heading,
};

const DROP_ZONE_ACTIVE_BORDER: &str = "#4ade80";
const DROP_ZONE_ACTIVE_FILL: &str = "#f0fdf4";

/// Card frame shared by every control section
fn section_frame(theme: &Theme, ui_scale: f32) -> egui::Frame {
    egui::Frame::none()
        .fill(hex_color(theme.secondary))
        .stroke(egui::Stroke::new(1.0, hex_color(theme.primary)))
        .rounding(egui::Rounding::same(scaled_margin(12.0, ui_scale)))
        .inner_margin(egui::Margin::same(scaled_margin(16.0, ui_scale)))
}

pub fn render_controls(ui: &mut egui::Ui, state: &mut CustomizerState, reads: &mut PendingReads) {
    let theme = state.theme();
    let ui_scale = state.config.ui_scale;
    let spacing = scaled_margin(16.0, ui_scale);

    section_frame(theme, ui_scale).show(ui, |ui| {
        ui.set_width(ui.available_width());
        color_section(ui, state, theme, ui_scale);
    });
    ui.add_space(spacing);

    section_frame(theme, ui_scale).show(ui, |ui| {
        ui.set_width(ui.available_width());
        measurements_section(ui, state, theme, ui_scale);
    });
    ui.add_space(spacing);

    section_frame(theme, ui_scale).show(ui, |ui| {
        ui.set_width(ui.available_width());
        upload_section(ui, state, reads, theme, ui_scale);
    });
    ui.add_space(spacing);

    section_frame(theme, ui_scale).show(ui, |ui| {
        ui.set_width(ui.available_width());
        text_section(ui, state, theme, ui_scale);
    });
}

fn color_section(ui: &mut egui::Ui, state: &mut CustomizerState, theme: &Theme, ui_scale: f32) {
    section_heading(ui, "Choose Color", theme, ui_scale);
    let selected = state.shirt_color();
    ui.horizontal_wrapped(|ui| {
        for color in ShirtColor::all() {
            let response = color_swatch(
                ui,
                hex_color(color.hex()),
                color == selected,
                hex_color(theme.primary),
                ui_scale,
            )
            .on_hover_text(color.hex());
            if response.clicked() {
                state.select_color(color);
            }
        }
    });
}

fn measurements_section(
    ui: &mut egui::Ui,
    state: &mut CustomizerState,
    theme: &Theme,
    ui_scale: f32,
) {
    section_heading(ui, "Body Measurements", theme, ui_scale);

    egui::Grid::new("measurements")
        .num_columns(2)
        .spacing([scaled_margin(12.0, ui_scale), scaled_margin(8.0, ui_scale)])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Height (cm)").color(hex_color(theme.text)));
            let height = ui.add(
                egui::TextEdit::singleline(&mut state.height_input)
                    .hint_text(format!("{}–{}", HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1))
                    .desired_width(scaled_margin(120.0, ui_scale)),
            );
            if height.changed() {
                state.commit_measurement_inputs();
            }
            ui.end_row();

            ui.label(egui::RichText::new("Weight (kg)").color(hex_color(theme.text)));
            let weight = ui.add(
                egui::TextEdit::singleline(&mut state.weight_input)
                    .hint_text(format!("{}–{}", WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1))
                    .desired_width(scaled_margin(120.0, ui_scale)),
            );
            if weight.changed() {
                state.commit_measurement_inputs();
            }
            ui.end_row();
        });

    ui.add_space(scaled_margin(8.0, ui_scale));
    ui.label(egui::RichText::new("Build").color(hex_color(theme.text)));
    let current = state.form().build;
    ui.horizontal_wrapped(|ui| {
        for build in Build::ALL {
            if option_button(ui, build == current, capitalize(build.label()), theme, ui_scale)
                .clicked()
            {
                state.update_field(FieldUpdate::Build(build));
            }
        }
    });
}

fn upload_section(
    ui: &mut egui::Ui,
    state: &mut CustomizerState,
    reads: &mut PendingReads,
    theme: &Theme,
    ui_scale: f32,
) {
    section_heading(ui, "Upload Design", theme, ui_scale);

    let dragging = state.drag_active();
    let (border, fill) = if dragging {
        (hex_color(DROP_ZONE_ACTIVE_BORDER), hex_color(DROP_ZONE_ACTIVE_FILL))
    } else {
        (hex_color(theme.primary), hex_color(theme.background))
    };

    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(2.0, border))
        .rounding(egui::Rounding::same(scaled_margin(12.0, ui_scale)))
        .inner_margin(egui::Margin::same(scaled_margin(16.0, ui_scale)))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(scaled_margin(150.0, ui_scale));

            if state.preview_image().is_some() {
                uploaded_design(ui, state, theme, ui_scale);
                return;
            }

            ui.vertical_centered(|ui| {
                let prompt = if dragging {
                    "Drop your image here!"
                } else {
                    "Drop an image here or click to upload"
                };
                ui.label(
                    egui::RichText::new(prompt)
                        .size(scaled_font(15.0, ui_scale))
                        .strong()
                        .color(hex_color(theme.text)),
                );
                ui.label(
                    egui::RichText::new("Supports JPG, PNG, GIF (max 10MB)")
                        .size(scaled_font(12.0, ui_scale))
                        .color(hex_color_alpha(theme.text, 0xb3)),
                );
                ui.add_space(scaled_margin(8.0, ui_scale));

                let button = egui::Button::new(
                    egui::RichText::new("Choose File").color(hex_color(theme.background)),
                )
                .fill(hex_color(theme.primary))
                .rounding(egui::Rounding::same(scaled_margin(8.0, ui_scale)));
                if ui.add(button).clicked() {
                    choose_file(state, reads);
                }

                if state.is_reading() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Reading file...");
                    });
                }
            });
        });
}

fn uploaded_design(ui: &mut egui::Ui, state: &mut CustomizerState, theme: &Theme, ui_scale: f32) {
    let max_side = scaled_margin(120.0, ui_scale);
    let mut remove = false;

    ui.horizontal(|ui| {
        if let Some(OverlayTexture::Ready { texture, size }) = &state.overlay_texture {
            let scale = (max_side / size.0.max(size.1).max(1) as f32).min(1.0);
            let thumb = egui::vec2(size.0 as f32 * scale, size.1 as f32 * scale);
            let response = ui
                .add(egui::Image::new((texture.id(), thumb)).sense(egui::Sense::click()))
                .on_hover_text("Click to remove");
            if response.clicked() {
                remove = true;
            }
        }

        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new("Design uploaded successfully!")
                    .strong()
                    .color(hex_color(theme.text)),
            );
            ui.label(
                egui::RichText::new("Click on the image to remove")
                    .size(scaled_font(12.0, ui_scale))
                    .color(hex_color_alpha(theme.text, 0xb3)),
            );
            if ui.button("Remove").clicked() {
                remove = true;
            }
        });
    });

    if remove {
        state.remove_preview_image();
    }
}

fn choose_file(state: &mut CustomizerState, reads: &mut PendingReads) {
    if has_native_picker() {
        if let Some(path) = pick_image_file() {
            if let Some(request) = state.accept_file(IncomingFile::from_path(path)) {
                reads.spawn(request);
            }
        }
    } else {
        state.show_import_image_dialog = true;
    }
}

fn text_section(ui: &mut egui::Ui, state: &mut CustomizerState, theme: &Theme, ui_scale: f32) {
    section_heading(ui, "Custom Text", theme, ui_scale);

    let mut text = state.form().shirt_text.clone();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .hint_text("Enter text to print on shirt...")
            .char_limit(MAX_SHIRT_TEXT_CHARS)
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .text_color(hex_color(theme.text)),
    );
    if response.changed() {
        state.update_field(FieldUpdate::ShirtText(text));
    }

    let form = state.form();
    let chars = form.shirt_text_chars();
    let lines = form.visible_line_count();
    let mut uppercase = false;
    let mut clear = false;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("Lines: {}/{}", lines, MAX_SHIRT_TEXT_LINES))
                .size(scaled_font(12.0, ui_scale))
                .color(hex_color_alpha(theme.text, 0x99)),
        );
        ui.label(
            egui::RichText::new(format!("{}/{}", chars, MAX_SHIRT_TEXT_CHARS))
                .size(scaled_font(12.0, ui_scale))
                .color(hex_color(theme.primary)),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let tint = hex_color_alpha(theme.primary, 0x22);
            let label = |s: &str| egui::RichText::new(s).color(hex_color(theme.primary));
            clear = ui.add(egui::Button::new(label("Clear")).fill(tint)).clicked();
            uppercase = ui.add(egui::Button::new(label("UPPERCASE")).fill(tint)).clicked();
        });
    });

    if uppercase {
        state.uppercase_text();
    }
    if clear {
        state.clear_text();
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
