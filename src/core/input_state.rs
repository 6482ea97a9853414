use glam::DVec2;

use super::input::{Button, ButtonSet, InputSource};

/// Raw input written by a backend's event callbacks and read by the camera.
///
/// Owned by the host and handed to the camera by reference each frame. There
/// is exactly one writer (the event handler) and the reads happen after the
/// event poll has returned.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    cursor: DVec2,
    wheel: f32,
    down: ButtonSet,
    pressed: ButtonSet,
    cursor_captured: Option<bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an absolute cursor position
    pub fn cursor_moved(&mut self, position: DVec2) {
        self.cursor = position;
    }

    /// Accumulate a wheel step; all steps before the next read are summed
    pub fn wheel_scrolled(&mut self, delta: f32) {
        self.wheel += delta;
    }

    /// Record a key or mouse button going down. Auto-repeat of a key that is
    /// already down does not register a new press.
    pub fn button_pressed(&mut self, button: Button) {
        if self.down.insert(button) {
            self.pressed.insert(button);
        }
    }

    pub fn button_released(&mut self, button: Button) {
        self.down.remove(button);
    }

    /// Drop every held button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.down.clear();
    }

    /// Last capture request made by the camera, if any
    pub fn cursor_captured(&self) -> Option<bool> {
        self.cursor_captured
    }

    pub fn pending_wheel(&self) -> f32 {
        self.wheel
    }
}

impl InputSource for InputState {
    fn cursor_position(&self) -> DVec2 {
        self.cursor
    }

    fn take_wheel(&mut self) -> f32 {
        std::mem::take(&mut self.wheel)
    }

    fn is_down(&self, button: Button) -> bool {
        self.down.contains(button)
    }

    fn was_pressed(&self, button: Button) -> bool {
        self.pressed.contains(button)
    }

    fn clear_pressed(&mut self) {
        self.pressed.clear();
    }

    fn set_cursor_captured(&mut self, captured: bool) {
        self.cursor_captured = Some(captured);
    }
}
