use std::path::PathBuf;

#[cfg(target_os = "windows")]
use rfd::FileDialog;

// Native file dialog (Windows only)
#[cfg(target_os = "windows")]
pub fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("All Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
        .add_filter("PNG Images", &["png"])
        .add_filter("JPEG Images", &["jpg", "jpeg"])
        .pick_file()
}

// Fallback for non-Windows (returns None, uses text input instead)
#[cfg(not(target_os = "windows"))]
pub fn pick_image_file() -> Option<PathBuf> {
    None
}

/// Whether a native picker exists on this platform
pub fn has_native_picker() -> bool {
    cfg!(target_os = "windows")
}
