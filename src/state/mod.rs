mod app_state;
mod config;
mod types;

pub use app_state::{CustomizerState, OverlayTexture};
pub use config::{AppConfig, DEFAULT_PANEL_MARGIN};
pub use types::{DragEvent, Layout};
