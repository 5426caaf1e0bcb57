mod canvas;
mod controls;
mod dialogs;
mod system;
mod widgets;

pub use system::ui_system;
