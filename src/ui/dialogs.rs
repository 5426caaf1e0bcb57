use bevy_egui::egui;

use crate::file::IncomingFile;
use crate::state::CustomizerState;
use crate::systems::PendingReads;

pub fn render_dialogs(ctx: &egui::Context, state: &mut CustomizerState, reads: &mut PendingReads) {
    // Path entry for platforms without a native picker
    if state.show_import_image_dialog {
        egui::Window::new("Choose Image")
            .collapsible(false)
            .resizable(false)
            .min_width(400.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Enter path to an image (PNG, JPG, GIF):");
                let response = ui.text_edit_singleline(&mut state.import_image_path);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.horizontal(|ui| {
                    let import_clicked = ui.button("Open").clicked();
                    if (import_clicked || submitted) && !state.import_image_path.trim().is_empty() {
                        let path = state.import_image_path.trim().to_string();
                        if let Some(request) = state.accept_file(IncomingFile::from_path(path)) {
                            reads.spawn(request);
                        }
                        state.show_import_image_dialog = false;
                        state.import_image_path.clear();
                    }
                    if ui.button("Cancel").clicked() {
                        state.show_import_image_dialog = false;
                    }
                });
            });
    }
}
