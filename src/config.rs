//! Camera tuning knobs and key bindings.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use crate::core::Button;

/// Whether the camera is driven by the mouse and keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CaptureMode {
    /// Pointer hidden and locked, camera responds to input
    #[default]
    Captured,
    /// Pointer released to the UI, camera frozen
    Free,
}

impl CaptureMode {
    pub fn toggled(self) -> Self {
        match self {
            CaptureMode::Captured => CaptureMode::Free,
            CaptureMode::Free => CaptureMode::Captured,
        }
    }

    pub fn is_captured(self) -> bool {
        self == CaptureMode::Captured
    }
}

/// Which physical button drives each camera action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Button,
    pub backward: Button,
    pub left: Button,
    pub right: Button,
    pub up: Button,
    pub down: Button,
    pub roll_left: Button,
    pub roll_right: Button,
    pub toggle_capture: Button,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: Button::KeyW,
            backward: Button::KeyS,
            left: Button::KeyA,
            right: Button::KeyD,
            up: Button::Space,
            down: Button::Shift,
            roll_left: Button::KeyQ,
            roll_right: Button::KeyE,
            toggle_capture: Button::Tab,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Radians of turn per pixel per second
    pub mouse_sensitivity: f32,
    /// Radians of zoom per wheel notch per second
    pub wheel_sensitivity: f32,
    /// Units of travel (and radians of roll) per second
    pub keyboard_sensitivity: f32,
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Moving the cursor up looks down when set
    pub invert_y: bool,
    pub initial_mode: CaptureMode,
    pub bindings: KeyBindings,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.5,
            wheel_sensitivity: 20.0,
            keyboard_sensitivity: 5.0,
            fovy: FRAC_PI_2,
            aspect: 1280.0 / 768.0,
            near: 0.01,
            far: 30.0,
            invert_y: false,
            initial_mode: CaptureMode::Captured,
            bindings: KeyBindings::default(),
        }
    }
}

impl CameraConfig {
    pub fn with_perspective(fovy: f32, aspect: f32) -> Self {
        Self {
            fovy,
            aspect,
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid camera config")
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize camera config")
    }
}

/// Read a JSON camera config. Missing fields fall back to the defaults.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<CameraConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = CameraConfig::from_json(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    log::debug!("loaded camera config from {}", path.display());
    Ok(config)
}
