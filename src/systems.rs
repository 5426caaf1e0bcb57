//! Bevy systems that turn window events into customizer state changes

use bevy::prelude::*;
use bevy::tasks::{block_on, futures_lite::future, IoTaskPool, Task};
use bevy::window::{FileDragAndDrop, PrimaryWindow, WindowResized};

use crate::file::{IncomingFile, ReadCompletion, ReadRequest};
use crate::state::{CustomizerState, DragEvent};
use crate::ui::ui_system;

/// Registers the customizer's state and event handlers. The handlers live
/// exactly as long as the app.
pub struct CustomizerPlugin;

impl Plugin for CustomizerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CustomizerState>()
            .init_resource::<PendingReads>()
            .add_systems(Startup, (setup_camera, measure_initial_viewport))
            .add_systems(
                Update,
                (
                    theme_shortcut,
                    track_viewport,
                    handle_file_drag_and_drop,
                    poll_file_reads,
                    tick_tooltip,
                    ui_system,
                )
                    .chain(),
            );
    }
}

/// File reads running on the IO task pool
#[derive(Resource, Default)]
pub struct PendingReads {
    tasks: Vec<Task<ReadCompletion>>,
}

impl PendingReads {
    pub fn spawn(&mut self, request: ReadRequest) {
        let task = IoTaskPool::get().spawn(async move { request.run() });
        self.tasks.push(task);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Alt+Q, pressed anywhere in the window
pub fn is_theme_shortcut(keys: &ButtonInput<KeyCode>) -> bool {
    keys.just_pressed(KeyCode::KeyQ) && keys.any_pressed([KeyCode::AltLeft, KeyCode::AltRight])
}

fn theme_shortcut(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<CustomizerState>) {
    if is_theme_shortcut(&keys) {
        state.cycle_theme();
    }
}

fn measure_initial_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut state: ResMut<CustomizerState>,
) {
    if let Ok(window) = windows.get_single() {
        state.on_resize(window.width());
    }
}

fn track_viewport(
    mut resized: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut state: ResMut<CustomizerState>,
) {
    let primary = primary.get_single().ok();
    // Only the latest size matters
    if let Some(event) = resized.read().filter(|e| Some(e.window) == primary).last() {
        state.on_resize(event.width);
    }
}

/// Turn winit hover/drop notifications into the drop zone's lifecycle.
/// Files dropped together arrive as separate events in the same frame.
fn handle_file_drag_and_drop(
    mut events: EventReader<FileDragAndDrop>,
    mut state: ResMut<CustomizerState>,
    mut reads: ResMut<PendingReads>,
) {
    let mut dropped = Vec::new();
    for event in events.read() {
        match event {
            FileDragAndDrop::HoveredFile { .. } => {
                let phase = if state.drag_active() {
                    DragEvent::Over
                } else {
                    DragEvent::Enter
                };
                state.on_drag(phase);
            }
            FileDragAndDrop::HoveredFileCanceled { .. } => {
                state.on_drag(DragEvent::Leave);
            }
            FileDragAndDrop::DroppedFile { path_buf, .. } => {
                dropped.push(IncomingFile::from_path(path_buf.clone()));
            }
        }
    }
    if !dropped.is_empty() {
        if let Some(request) = state.on_drag(DragEvent::Drop(dropped)) {
            reads.spawn(request);
        }
    }
}

fn poll_file_reads(mut reads: ResMut<PendingReads>, mut state: ResMut<CustomizerState>) {
    let mut finished = Vec::new();
    reads.tasks.retain_mut(|task| match block_on(future::poll_once(task)) {
        Some(completion) => {
            finished.push(completion);
            false
        }
        None => true,
    });
    for completion in finished {
        state.complete_read(completion);
    }
}

fn tick_tooltip(time: Res<Time>, mut state: ResMut<CustomizerState>) {
    state.tick(time.delta());
}
