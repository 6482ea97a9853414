use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyR,
    KeyF,
    KeyZ,
    KeyX,
    KeyC,
    Space,
    Shift,
    Control,
    Tab,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    MouseLeft,
    MouseRight,
}

impl Button {
    pub const ALL: [Button; 22] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::KeyQ,
        Button::KeyE,
        Button::KeyR,
        Button::KeyF,
        Button::KeyZ,
        Button::KeyX,
        Button::KeyC,
        Button::Space,
        Button::Shift,
        Button::Control,
        Button::Tab,
        Button::Escape,
        Button::ArrowUp,
        Button::ArrowDown,
        Button::ArrowLeft,
        Button::ArrowRight,
        Button::MouseLeft,
        Button::MouseRight,
    ];

    const fn mask(self) -> u32 {
        1 << self as u32
    }
}

/// Set of buttons packed into a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSet(u32);

impl ButtonSet {
    pub const EMPTY: Self = Self(0);

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub fn insert(&mut self, button: Button) -> bool {
        let was = self.contains(button);
        self.0 |= button.mask();
        !was
    }

    pub fn remove(&mut self, button: Button) -> bool {
        let was = self.contains(button);
        self.0 &= !button.mask();
        was
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for button in iter {
            set.insert(button);
        }
        set
    }
}

/// Per-frame snapshot of the keyboard.
///
/// `is_down` is level-triggered (held keys, for continuous motion) while
/// `was_pressed` is edge-triggered (true only on the frame the key went
/// down, never on auto-repeat).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub down: ButtonSet,
    pub pressed: ButtonSet,
}

impl KeyState {
    pub fn is_down(&self, button: Button) -> bool {
        self.down.contains(button)
    }

    pub fn was_pressed(&self, button: Button) -> bool {
        self.pressed.contains(button)
    }
}

/// Capability interface the camera pulls its input from.
///
/// Implementations wrap whatever windowing library delivers raw events. The
/// host must finish polling platform events before the camera samples, so
/// every write for a frame is visible to that frame's reads.
pub trait InputSource {
    /// Absolute cursor position in screen pixels. Kept in `f64` so a
    /// virtual cursor that drifts far from the origin still yields exact
    /// one-pixel deltas.
    fn cursor_position(&self) -> DVec2;

    /// Wheel movement accumulated since the last call; resets to zero
    fn take_wheel(&mut self) -> f32;

    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Check if button went down since the presses were last cleared
    fn was_pressed(&self, button: Button) -> bool;

    /// Forget edge-triggered presses once a frame has consumed them
    fn clear_pressed(&mut self) {}

    /// Hide and lock the pointer (`true`) or release it (`false`)
    fn set_cursor_captured(&mut self, _captured: bool) {}

    /// Snapshot of every button this source knows about
    fn key_state(&self) -> KeyState {
        let mut state = KeyState::default();
        for button in Button::ALL {
            if self.is_down(button) {
                state.down.insert(button);
            }
            if self.was_pressed(button) {
                state.pressed.insert(button);
            }
        }
        state
    }
}
