use bevy::log::warn;
use bevy_egui::egui;
use egui::epaint::{CubicBezierShape, QuadraticBezierShape};

use crate::imaging::{calculate_fit_scale, decode_data_uri_to_texture};
use crate::render::geometry::{
    line_baselines, FoldShape, Point, COLLAR, FOLDS, IMAGE_BOX, LEFT_SLEEVE, OUTLINE_WIDTH,
    BODY_OUTLINE, RIGHT_SLEEVE, SLEEVE_SEAMS, TEXT_CENTER, TEXT_SIZE, TORSO, VIEW_BOX,
};
use crate::render::PreviewScene;
use crate::state::{CustomizerState, OverlayTexture};
use crate::ui::widgets::{hex_color, hex_color_alpha, scaled_margin};

/// Maps view-box coordinates onto a screen rect, preserving aspect ratio
struct ViewTransform {
    origin: egui::Pos2,
    scale: f32,
}

impl ViewTransform {
    fn fit(rect: egui::Rect) -> Self {
        let scale = (rect.width() / VIEW_BOX.0).min(rect.height() / VIEW_BOX.1);
        let size = egui::vec2(VIEW_BOX.0 * scale, VIEW_BOX.1 * scale);
        Self {
            origin: rect.center() - size / 2.0,
            scale,
        }
    }

    fn pos(&self, (x, y): Point) -> egui::Pos2 {
        self.origin + egui::vec2(x * self.scale, y * self.scale)
    }

    fn points(&self, points: &[Point]) -> Vec<egui::Pos2> {
        points.iter().map(|&p| self.pos(p)).collect()
    }
}

/// Decode the uploaded design once per image
pub fn ensure_overlay_texture(ctx: &egui::Context, state: &mut CustomizerState) {
    if state.overlay_texture.is_some() {
        return;
    }
    let Some(uri) = state.preview_image() else {
        return;
    };
    let overlay = match decode_data_uri_to_texture(ctx, "design_overlay", uri) {
        Ok((texture, size)) => OverlayTexture::Ready { texture, size },
        Err(e) => {
            warn!("Cannot display uploaded design: {}", e);
            OverlayTexture::Failed
        }
    };
    state.overlay_texture = Some(overlay);
}

/// Draw the preview card: outer panel, framed backdrop and the garment
pub fn render_preview(ui: &mut egui::Ui, state: &CustomizerState, size: egui::Vec2) {
    let scene = state.preview();
    let theme = scene.theme;
    let ui_scale = state.config.ui_scale;

    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);

    // Card
    let card = rect.shrink(2.0);
    let card_rounding = egui::Rounding::same(scaled_margin(16.0, ui_scale));
    painter.rect_filled(card, card_rounding, hex_color(theme.secondary));
    painter.rect_stroke(card, card_rounding, egui::Stroke::new(1.0, hex_color(theme.primary)));

    // Inner frame
    let inner = card.shrink(scaled_margin(24.0, ui_scale));
    let inner_rounding = egui::Rounding::same(scaled_margin(12.0, ui_scale));
    painter.rect_filled(inner, inner_rounding, hex_color(theme.background));
    painter.rect_stroke(
        inner,
        inner_rounding,
        egui::Stroke::new(4.0, hex_color(theme.accent)),
    );

    let garment_rect = inner.shrink(scaled_margin(24.0, ui_scale));
    paint_scene(&painter, &scene, state.overlay_texture.as_ref(), garment_rect);
}

/// Paint a preview scene into `rect`
pub fn paint_scene(
    painter: &egui::Painter,
    scene: &PreviewScene<'_>,
    overlay: Option<&OverlayTexture>,
    rect: egui::Rect,
) {
    let view = ViewTransform::fit(rect);
    let fill = hex_color(scene.fill);
    let outline = egui::Stroke::new(OUTLINE_WIDTH * view.scale, hex_color(scene.outline));

    // Fill convex pieces, then stroke the real outline over the seams
    for piece in [&TORSO[..], &LEFT_SLEEVE[..], &RIGHT_SLEEVE[..]] {
        painter.add(egui::Shape::convex_polygon(
            view.points(piece),
            fill,
            egui::Stroke::new(0.5, fill),
        ));
    }
    painter.add(egui::Shape::closed_line(view.points(&BODY_OUTLINE), outline));

    let [start, control, end] = COLLAR;
    painter.add(QuadraticBezierShape::from_points_stroke(
        [view.pos(start), view.pos(control), view.pos(end)],
        false,
        egui::Color32::TRANSPARENT,
        outline,
    ));
    for seam in &SLEEVE_SEAMS {
        painter.add(egui::Shape::line(view.points(seam), outline));
    }

    for fold in &FOLDS {
        let points = match fold.shape {
            FoldShape::Line(a, b) => vec![view.pos(a), view.pos(b)],
            FoldShape::Cubic([a, b, c, d]) => CubicBezierShape::from_points_stroke(
                [view.pos(a), view.pos(b), view.pos(c), view.pos(d)],
                false,
                egui::Color32::TRANSPARENT,
                egui::Stroke::NONE,
            )
            .flatten(Some(0.5)),
        };
        let color = hex_color(scene.fold_stroke).gamma_multiply(fold.opacity);
        painter.extend(egui::Shape::dashed_line(
            &points,
            egui::Stroke::new(view.scale, color),
            fold.dash.0 * view.scale,
            fold.dash.1 * view.scale,
        ));
    }

    if scene.image.is_some() {
        let (x, y, w, h) = IMAGE_BOX;
        let image_box = egui::Rect::from_min_max(view.pos((x, y)), view.pos((x + w, y + h)));
        match overlay {
            Some(OverlayTexture::Ready { texture, size }) => {
                let scale = calculate_fit_scale(*size, (image_box.width(), image_box.height()));
                let image_size = egui::vec2(size.0 as f32 * scale, size.1 as f32 * scale);
                let image_rect = egui::Rect::from_center_size(image_box.center(), image_size);
                painter.image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            Some(OverlayTexture::Failed) => {
                painter.rect_stroke(
                    image_box,
                    0.0,
                    egui::Stroke::new(1.0, hex_color_alpha(scene.outline, 0x88)),
                );
            }
            None => {}
        }
    }

    let lines = scene.lines();
    let font = egui::FontId::proportional(TEXT_SIZE * view.scale);
    let text_color = hex_color(scene.text_color);
    for (line, y) in lines.iter().zip(line_baselines(lines.len())) {
        painter.text(
            view.pos((TEXT_CENTER.0, y)),
            egui::Align2::CENTER_CENTER,
            *line,
            font.clone(),
            text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_transform_centers_view_box() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 880.0));
        let view = ViewTransform::fit(rect);
        assert_eq!(view.scale, 2.0);
        // 440px tall drawing centered in 880px
        assert_eq!(view.pos((0.0, 0.0)), egui::pos2(0.0, 220.0));
        assert_eq!(view.pos((200.0, 220.0)), egui::pos2(400.0, 660.0));
    }
}
