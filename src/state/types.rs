use bevy::prelude::*;
use std::time::Duration;

use crate::file::IncomingFile;

/// Window width (logical px) below which the single-column layout is used
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// How long the theme tooltip stays up after a theme change
pub const TOOLTIP_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    SingleColumn,
    #[default]
    TwoColumn,
}

impl Layout {
    pub fn for_width(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Layout::SingleColumn
        } else {
            Layout::TwoColumn
        }
    }
}

/// Drag-and-drop lifecycle as seen by the drop target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop(Vec<IncomingFile>),
}

/// "Theme changed" notice with a fixed lifetime. Showing it again restarts
/// the countdown.
#[derive(Debug, Clone)]
pub struct ThemeTooltip {
    timer: Timer,
    visible: bool,
}

impl Default for ThemeTooltip {
    fn default() -> Self {
        Self {
            timer: Timer::new(TOOLTIP_DURATION, TimerMode::Once),
            visible: false,
        }
    }
}

impl ThemeTooltip {
    pub fn show(&mut self) {
        self.timer.reset();
        self.visible = true;
    }

    pub fn tick(&mut self, delta: Duration) {
        if !self.visible {
            return;
        }
        self.timer.tick(delta);
        if self.timer.finished() {
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
