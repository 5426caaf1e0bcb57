use bevy::prelude::*;
use bevy_egui::egui;
use std::time::Duration;

use super::config::AppConfig;
use super::types::{DragEvent, Layout, ThemeTooltip};
use crate::file::{IncomingFile, IntakeError, IntakePipeline, ReadCompletion, ReadRequest};
use crate::model::{FieldUpdate, FormValues, ShirtColor, Theme, ThemeIndex};
use crate::render::PreviewScene;

/// Uploaded design decoded for painting. Reset whenever the image changes.
pub enum OverlayTexture {
    Ready {
        texture: egui::TextureHandle,
        size: (u32, u32),
    },
    Failed,
}

/// All customizer state. Created with defaults at startup and dropped at exit.
#[derive(Resource)]
pub struct CustomizerState {
    pub config: AppConfig,

    theme: ThemeIndex,
    tooltip: ThemeTooltip,
    shirt_color: ShirtColor,
    preview_image: Option<String>,
    drag_active: bool,
    layout: Layout,
    form: FormValues,
    intake: IntakePipeline,

    // Raw widget buffers for the numeric inputs
    pub height_input: String,
    pub weight_input: String,

    // Path entry used where no native picker exists
    pub show_import_image_dialog: bool,
    pub import_image_path: String,

    pub overlay_texture: Option<OverlayTexture>,
}

impl Default for CustomizerState {
    fn default() -> Self {
        Self::with_config(AppConfig::load())
    }
}

impl CustomizerState {
    pub fn with_config(config: AppConfig) -> Self {
        let form = FormValues::default();
        Self {
            config,
            theme: ThemeIndex::default(),
            tooltip: ThemeTooltip::default(),
            shirt_color: ShirtColor::default(),
            preview_image: None,
            drag_active: false,
            layout: Layout::default(),
            height_input: form.height.to_string(),
            weight_input: form.weight.to_string(),
            form,
            intake: IntakePipeline::default(),
            show_import_image_dialog: false,
            import_image_path: String::new(),
            overlay_texture: None,
        }
    }

    // Theme

    pub fn theme(&self) -> &'static Theme {
        self.theme.theme()
    }

    pub fn theme_index(&self) -> usize {
        self.theme.get()
    }

    /// Advance to the next theme and (re)start the tooltip countdown
    pub fn cycle_theme(&mut self) -> &'static Theme {
        self.theme = self.theme.next();
        self.tooltip.show();
        let theme = self.theme();
        info!("Theme changed to {}", theme.name);
        theme
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip.is_visible()
    }

    pub fn tick(&mut self, delta: Duration) {
        self.tooltip.tick(delta);
    }

    // Garment color

    pub fn shirt_color(&self) -> ShirtColor {
        self.shirt_color
    }

    pub fn select_color(&mut self, color: ShirtColor) {
        self.shirt_color = color;
    }

    // Viewport

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn on_resize(&mut self, width: f32) -> Layout {
        let layout = Layout::for_width(width);
        if layout != self.layout {
            debug!("Layout switched to {:?} at width {}", layout, width);
        }
        self.layout = layout;
        layout
    }

    // Image intake

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn preview_image(&self) -> Option<&str> {
        self.preview_image.as_deref()
    }

    /// Feed one drag lifecycle event. A drop hands back a read request for
    /// the first dropped file when it is an image.
    pub fn on_drag(&mut self, event: DragEvent) -> Option<ReadRequest> {
        match event {
            DragEvent::Enter | DragEvent::Over => {
                self.drag_active = true;
                None
            }
            DragEvent::Leave => {
                self.drag_active = false;
                None
            }
            DragEvent::Drop(files) => {
                self.drag_active = false;
                files.into_iter().next().and_then(|file| self.accept_file(file))
            }
        }
    }

    /// Entry point for the file picker and for drops
    pub fn accept_file(&mut self, file: IncomingFile) -> Option<ReadRequest> {
        match self.intake.submit(file) {
            Ok(request) => {
                debug!("Reading {} ({})", request.file.path.display(), request.file.media_type);
                Some(request)
            }
            Err(IntakeError::UnsupportedMediaType(media_type)) => {
                debug!("Ignoring dropped file of type {}", media_type);
                None
            }
            Err(e) => {
                warn!("Could not accept file: {}", e);
                None
            }
        }
    }

    /// Apply a finished read. Returns true when the preview image changed.
    pub fn complete_read(&mut self, completion: ReadCompletion) -> bool {
        match self.intake.complete(completion) {
            Ok(Some(uri)) => {
                info!("Design loaded ({} bytes as data URI)", uri.len());
                self.preview_image = Some(uri);
                self.overlay_texture = None;
                true
            }
            Ok(None) => {
                debug!("Discarding stale file read");
                false
            }
            Err(e) => {
                warn!("Image read failed: {}", e);
                false
            }
        }
    }

    pub fn is_reading(&self) -> bool {
        self.intake.is_reading()
    }

    pub fn remove_preview_image(&mut self) {
        self.preview_image = None;
        self.overlay_texture = None;
        self.intake.invalidate();
    }

    // Form

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    /// Replace one form field, keeping the others
    pub fn update_field(&mut self, update: FieldUpdate) {
        match &update {
            FieldUpdate::Height(m) => self.height_input = m.to_string(),
            FieldUpdate::Weight(m) => self.weight_input = m.to_string(),
            _ => {}
        }
        self.form.apply(update);
    }

    /// Parse the raw measurement buffers into the model, leaving the buffers
    /// as typed
    pub fn commit_measurement_inputs(&mut self) {
        for (field, raw) in [("height", &self.height_input), ("weight", &self.weight_input)] {
            match FieldUpdate::parse(field, raw) {
                Ok(update) => self.form.apply(update),
                Err(e) => warn!("{}", e),
            }
        }
    }

    pub fn uppercase_text(&mut self) {
        let upper = self.form.shirt_text.to_uppercase();
        self.update_field(FieldUpdate::ShirtText(upper));
    }

    pub fn clear_text(&mut self) {
        self.update_field(FieldUpdate::ShirtText(String::new()));
    }

    // Rendering

    pub fn preview(&self) -> PreviewScene<'_> {
        PreviewScene::build(
            self.theme(),
            self.shirt_color,
            self.preview_image(),
            &self.form.shirt_text,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::ReadToken;
    use crate::model::{Build, Measurement, THEMES};
    use crate::state::types::TOOLTIP_DURATION;

    fn state() -> CustomizerState {
        CustomizerState::with_config(AppConfig::default())
    }

    fn png_completion(request: &ReadRequest, bytes: &[u8]) -> ReadCompletion {
        completion_for(request.token, bytes)
    }

    fn completion_for(token: ReadToken, bytes: &[u8]) -> ReadCompletion {
        ReadCompletion {
            token,
            media_type: "image/png".to_string(),
            bytes: Ok(bytes.to_vec()),
        }
    }

    #[test]
    fn test_defaults() {
        let state = state();
        assert_eq!(state.theme_index(), 0);
        assert_eq!(state.shirt_color().hex(), "#FFFFFF");
        assert!(state.preview_image().is_none());
        assert!(!state.drag_active());
        assert!(!state.tooltip_visible());
        assert_eq!(state.layout(), Layout::TwoColumn);
        assert_eq!(state.form().height, Measurement::Value(180));
        assert_eq!(state.form().weight, Measurement::Value(80));
        assert_eq!(state.form().build, Build::Athletic);
        assert_eq!(state.form().shirt_text, "");
        assert_eq!(state.height_input, "180");
    }

    #[test]
    fn test_theme_cycles_modulo_catalog() {
        let mut state = state();
        for i in 1..=9 {
            state.cycle_theme();
            assert_eq!(state.theme_index(), i % THEMES.len());
        }
        let mut state = self::state();
        for _ in 0..THEMES.len() {
            state.cycle_theme();
        }
        assert_eq!(state.theme_index(), 0);
    }

    #[test]
    fn test_tooltip_hides_after_two_seconds() {
        let mut state = state();
        assert_eq!(state.cycle_theme().name, "Dark Mode");
        assert!(state.tooltip_visible());

        state.tick(Duration::from_millis(1999));
        assert!(state.tooltip_visible());
        state.tick(Duration::from_millis(1));
        assert!(!state.tooltip_visible());
    }

    #[test]
    fn test_repeat_cycle_restarts_tooltip() {
        let mut state = state();
        state.cycle_theme();
        state.tick(Duration::from_millis(1500));
        state.cycle_theme();
        state.tick(Duration::from_millis(1500));
        assert!(state.tooltip_visible());
        state.tick(TOOLTIP_DURATION);
        assert!(!state.tooltip_visible());
    }

    #[test]
    fn test_color_selection_is_idempotent() {
        let mut state = state();
        let orange = ShirtColor::from_hex("#FFA500").unwrap();
        state.select_color(orange);
        assert_eq!(state.shirt_color().hex(), "#FFA500");
        state.select_color(orange);
        assert_eq!(state.shirt_color(), orange);
    }

    #[test]
    fn test_hello_world_scenario() {
        let mut state = state();
        state.update_field(FieldUpdate::ShirtText("HELLO\nWORLD\nFOO\nBAR".into()));
        assert_eq!(state.preview().lines(), ["HELLO", "WORLD", "FOO"]);
    }

    #[test]
    fn test_uppercase_and_clear() {
        let mut state = state();
        state.update_field(FieldUpdate::ShirtText("Hello\nwörld".into()));
        state.uppercase_text();
        assert_eq!(state.form().shirt_text, "HELLO\nWÖRLD");
        state.clear_text();
        assert_eq!(state.form().shirt_text, "");
    }

    #[test]
    fn test_uppercase_respects_length_cap() {
        let mut state = state();
        // 'ß' upper-cases to "SS", doubling the length
        state.update_field(FieldUpdate::ShirtText("ß".repeat(80)));
        state.uppercase_text();
        assert_eq!(state.form().shirt_text_chars(), 100);
    }

    #[test]
    fn test_field_updates_keep_other_fields() {
        let mut state = state();
        state.update_field(FieldUpdate::ShirtText("TEXT".into()));
        state.update_field(FieldUpdate::Weight(Measurement::Value(95)));
        assert_eq!(state.form().shirt_text, "TEXT");
        assert_eq!(state.form().height, Measurement::Value(180));
        assert_eq!(state.weight_input, "95");
    }

    #[test]
    fn test_invalid_height_kept_until_corrected() {
        let mut state = state();
        state.height_input.clear();
        state.commit_measurement_inputs();
        assert_eq!(state.form().height, Measurement::Invalid);
        assert_eq!(state.height_input, "");

        state.height_input = "165".into();
        state.commit_measurement_inputs();
        assert_eq!(state.form().height, Measurement::Value(165));
        assert_eq!(state.form().weight, Measurement::Value(80));
    }

    #[test]
    fn test_viewport_scenario() {
        let mut state = state();
        assert_eq!(state.on_resize(1024.0), Layout::TwoColumn);
        assert_eq!(state.on_resize(500.0), Layout::SingleColumn);
        assert_eq!(state.layout(), Layout::SingleColumn);
        assert_eq!(state.on_resize(1024.0), Layout::TwoColumn);
        assert_eq!(state.on_resize(767.9), Layout::SingleColumn);
        assert_eq!(state.on_resize(768.0), Layout::TwoColumn);
    }

    #[test]
    fn test_drag_state_transitions() {
        let mut state = state();
        assert!(state.on_drag(DragEvent::Enter).is_none());
        assert!(state.drag_active());
        state.on_drag(DragEvent::Over);
        assert!(state.drag_active());
        state.on_drag(DragEvent::Leave);
        assert!(!state.drag_active());
    }

    #[test]
    fn test_dropping_non_image_is_ignored() {
        let mut state = state();
        state.on_drag(DragEvent::Enter);
        let request = state.on_drag(DragEvent::Drop(vec![IncomingFile::with_media_type(
            "notes.txt",
            "text/plain",
        )]));
        assert!(request.is_none());
        assert!(state.preview_image().is_none());
        assert!(!state.drag_active());
    }

    #[test]
    fn test_drop_forwards_first_file_only() {
        let mut state = state();
        state.on_drag(DragEvent::Over);
        let request = state
            .on_drag(DragEvent::Drop(vec![
                IncomingFile::from_path("first.png"),
                IncomingFile::from_path("second.png"),
            ]))
            .unwrap();
        assert_eq!(request.file.path.to_str(), Some("first.png"));
        assert!(state.on_drag(DragEvent::Drop(Vec::new())).is_none());
    }

    #[test]
    fn test_completed_read_sets_preview() {
        let mut state = state();
        let request = state.accept_file(IncomingFile::from_path("design.png")).unwrap();
        assert!(state.is_reading());
        assert!(state.complete_read(png_completion(&request, b"new")));
        assert_eq!(state.preview_image(), Some("data:image/png;base64,bmV3"));
        assert!(!state.is_reading());
    }

    #[test]
    fn test_stale_read_does_not_overwrite() {
        let mut state = state();
        let first = state.accept_file(IncomingFile::from_path("a.png")).unwrap();
        let second = state.accept_file(IncomingFile::from_path("b.png")).unwrap();
        assert!(state.complete_read(png_completion(&second, b"new")));
        assert!(!state.complete_read(png_completion(&first, b"old")));
        assert_eq!(state.preview_image(), Some("data:image/png;base64,bmV3"));
    }

    #[test]
    fn test_failed_read_leaves_preview_unchanged() {
        let mut state = state();
        let request = state.accept_file(IncomingFile::from_path("a.png")).unwrap();
        state.complete_read(png_completion(&request, b"new"));

        let request = state
            .accept_file(IncomingFile::from_path("/definitely/not/here.png"))
            .unwrap();
        assert!(!state.complete_read(request.run()));
        assert_eq!(state.preview_image(), Some("data:image/png;base64,bmV3"));
    }

    #[test]
    fn test_remove_preview_image() {
        let mut state = state();
        let request = state.accept_file(IncomingFile::from_path("a.png")).unwrap();
        state.complete_read(png_completion(&request, b"new"));
        let pending = state.accept_file(IncomingFile::from_path("b.png")).unwrap();

        state.remove_preview_image();
        assert!(state.preview_image().is_none());
        // A read that was in flight when the image was removed is dropped
        assert!(!state.complete_read(png_completion(&pending, b"late")));
        assert!(state.preview_image().is_none());
    }
}
