mod file;
mod imaging;
mod model;
mod render;
mod state;
mod systems;
mod ui;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::state::{AppConfig, CustomizerState};
use crate::systems::CustomizerPlugin;

fn main() {
    let config = AppConfig::load();
    let (width, height) = config.window_size;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "T-Shirt Customizer".into(),
                resolution: (width, height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(CustomizerState::with_config(config))
        .add_plugins(CustomizerPlugin)
        .run();
}
