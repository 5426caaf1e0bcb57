use bevy_egui::egui;

use super::decode_data_uri;
use crate::file::IntakeError;

const MAX_TEXTURE_SIZE: u32 = 2048;

/// Decode a data-URI image into an egui texture, returning its pixel size
pub fn decode_data_uri_to_texture(
    ctx: &egui::Context,
    name: &str,
    uri: &str,
) -> Result<(egui::TextureHandle, (u32, u32)), IntakeError> {
    let (_, bytes) = decode_data_uri(uri)?;

    let img = image::load_from_memory(&bytes).map_err(|e| IntakeError::Decode(e.to_string()))?;

    // Large photos are downscaled; the overlay never needs more
    let (width, height) = (img.width(), img.height());
    let img = if width > MAX_TEXTURE_SIZE || height > MAX_TEXTURE_SIZE {
        let scale = (MAX_TEXTURE_SIZE as f32 / width as f32)
            .min(MAX_TEXTURE_SIZE as f32 / height as f32);
        let new_width = (width as f32 * scale) as u32;
        let new_height = (height as f32 * scale) as u32;
        img.resize(new_width, new_height, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = (rgba.width(), rgba.height());
    let pixels = rgba.into_raw();
    let color_image =
        egui::ColorImage::from_rgba_unmultiplied([size.0 as usize, size.1 as usize], &pixels);

    Ok((
        ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR),
        size,
    ))
}

/// Scale factor that fits an image inside a box while preserving aspect ratio
pub fn calculate_fit_scale(image_size: (u32, u32), box_size: (f32, f32)) -> f32 {
    if image_size.0 == 0 || image_size.1 == 0 {
        return 0.0;
    }
    let scale_x = box_size.0 / image_size.0 as f32;
    let scale_y = box_size.1 / image_size.1 as f32;
    scale_x.min(scale_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale_preserves_aspect() {
        assert_eq!(calculate_fit_scale((200, 100), (100.0, 100.0)), 0.5);
        assert_eq!(calculate_fit_scale((50, 100), (100.0, 100.0)), 1.0);
        assert_eq!(calculate_fit_scale((0, 100), (100.0, 100.0)), 0.0);
    }
}
