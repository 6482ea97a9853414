use glam::DVec2;
use std::sync::Arc;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window};

use super::input::{Button, InputSource};
use super::input_state::InputState;

/// Pixels of touchpad scroll treated as one wheel notch
const PIXELS_PER_LINE: f32 = 40.0;

/// Adapter that bridges Winit events to [`InputSource`]
///
/// While the cursor is captured most platforms stop reporting `CursorMoved`,
/// so raw mouse motion is folded into a virtual absolute position instead.
/// The camera only ever sees absolute positions either way.
#[derive(Debug, Default)]
pub struct WinitInput {
    state: InputState,
    window: Option<Arc<Window>>,
    captured: bool,
}

impl WinitInput {
    /// Create a new adapter with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the window that cursor capture requests apply to
    pub fn set_window(&mut self, window: Arc<Window>) {
        self.window = Some(window);
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.apply_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::mouse_button_to_button(*button) {
                    self.apply_button(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if !self.captured {
                    self.state.cursor_moved(DVec2::new(position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.state.wheel_scrolled(lines);
            }
            WindowEvent::Focused(false) => self.state.release_all(),
            _ => {}
        }
    }

    /// Process raw device motion; only used while the cursor is captured
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.captured {
                let cursor = self.state.cursor_position() + DVec2::new(*dx, *dy);
                self.state.cursor_moved(cursor);
            }
        }
    }

    fn apply_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => self.state.button_pressed(button),
            ElementState::Released => self.state.button_released(button),
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::KeyF => Some(Button::KeyF),
            KeyCode::KeyZ => Some(Button::KeyZ),
            KeyCode::KeyX => Some(Button::KeyX),
            KeyCode::KeyC => Some(Button::KeyC),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Button::Control),
            KeyCode::Tab => Some(Button::Tab),
            KeyCode::Escape => Some(Button::Escape),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }

    fn apply_capture(window: &Window, captured: bool) {
        if captured {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                log::warn!("cursor grab unavailable: {}", e);
            }
        } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("failed to release cursor: {}", e);
        }
        window.set_cursor_visible(!captured);
    }
}

impl InputSource for WinitInput {
    fn cursor_position(&self) -> DVec2 {
        self.state.cursor_position()
    }

    fn take_wheel(&mut self) -> f32 {
        self.state.take_wheel()
    }

    fn is_down(&self, button: Button) -> bool {
        self.state.is_down(button)
    }

    fn was_pressed(&self, button: Button) -> bool {
        self.state.was_pressed(button)
    }

    fn clear_pressed(&mut self) {
        self.state.clear_pressed();
    }

    fn set_cursor_captured(&mut self, captured: bool) {
        self.captured = captured;
        self.state.set_cursor_captured(captured);
        if let Some(window) = &self.window {
            Self::apply_capture(window, captured);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit event construction requires internal fields that are not publicly
    // accessible, so these tests go through the mapping helpers and device
    // events instead.

    #[test]
    fn test_new_adapter_empty() {
        let input = WinitInput::new();
        assert!(!input.is_down(Button::KeyW));
        assert!(!input.is_captured());
        assert_eq!(input.cursor_position(), DVec2::ZERO);
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(WinitInput::keycode_to_button(KeyCode::KeyW), Some(Button::KeyW));
        assert_eq!(WinitInput::keycode_to_button(KeyCode::ShiftRight), Some(Button::Shift));
        assert_eq!(WinitInput::keycode_to_button(KeyCode::Tab), Some(Button::Tab));
        assert_eq!(WinitInput::keycode_to_button(KeyCode::F12), None);
    }

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(
            WinitInput::mouse_button_to_button(MouseButton::Right),
            Some(Button::MouseRight)
        );
        assert_eq!(WinitInput::mouse_button_to_button(MouseButton::Middle), None);
    }

    #[test]
    fn test_raw_motion_only_moves_virtual_cursor_when_captured() {
        let mut input = WinitInput::new();
        let motion = DeviceEvent::MouseMotion { delta: (3.0, -2.0) };

        input.process_device_event(&motion);
        assert_eq!(input.cursor_position(), DVec2::ZERO);

        input.set_cursor_captured(true);
        input.process_device_event(&motion);
        input.process_device_event(&motion);
        assert_eq!(input.cursor_position(), DVec2::new(6.0, -4.0));
        assert_eq!(input.state().cursor_captured(), Some(true));
    }

    #[test]
    fn test_long_captured_turn_keeps_pixel_precision() {
        use crate::core::InputSampler;

        let mut input = WinitInput::new();
        input.set_cursor_captured(true);
        let mut sampler = InputSampler::new();
        sampler.sample(&mut input, 0.0);

        let sweep = DeviceEvent::MouseMotion { delta: (1024.0, 0.0) };
        for _ in 0..(1 << 14) {
            input.process_device_event(&sweep);
        }
        assert_eq!(input.cursor_position().x, 16_777_216.0);
        sampler.sample(&mut input, 0.1);

        input.process_device_event(&DeviceEvent::MouseMotion { delta: (1.0, 0.0) });
        let sample = sampler.sample(&mut input, 0.2);
        assert_eq!(sample.cursor_delta.x, 1.0);

        input.process_device_event(&DeviceEvent::MouseMotion { delta: (0.3, 0.0) });
        let sample = sampler.sample(&mut input, 0.3);
        assert!((sample.cursor_delta.x - 0.3).abs() < 1e-4);
    }
}
