use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::math::Quaternion;

/// Margin kept between pitch and the poles
pub const PITCH_EPSILON: f32 = 0.01;
/// Largest pitch magnitude the basis is ever evaluated at
pub const PITCH_LIMIT: f32 = FRAC_PI_2 - PITCH_EPSILON;

/// Camera forward in its own frame
const LOCAL_FORWARD: Vec3 = Vec3::NEG_Z;
/// Camera right in its own frame, also the pitch axis
const LOCAL_RIGHT: Vec3 = Vec3::X;
/// Yaw axis
const WORLD_UP: Vec3 = Vec3::Y;

/// Yaw outer, pitch inner: pitch turns about the camera's own right axis.
pub fn compose(yaw: f32, pitch: f32) -> Quaternion {
    Quaternion::from_angle_axis(yaw, WORLD_UP) * Quaternion::from_angle_axis(pitch, LOCAL_RIGHT)
}

pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Yaw/pitch/roll angles and the basis derived from them.
///
/// `rotation` only ever carries yaw and pitch. Roll is a twist about
/// `forward` applied afterwards to `right` and `up`, so the triple stays
/// orthonormal while the canonical rotation stays roll-free.
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    yaw: f32,
    pitch: f32,
    roll: f32,
    rotation: Quaternion,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            rotation: Quaternion::IDENTITY,
            forward: LOCAL_FORWARD,
            right: LOCAL_RIGHT,
            up: WORLD_UP,
        }
    }
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        let mut orientation = Self {
            yaw,
            pitch: clamp_pitch(pitch),
            roll,
            ..Self::default()
        };
        orientation.refresh();
        orientation
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn rotation(&self) -> Quaternion {
        self.rotation
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Accumulate yaw and pitch. The basis is not refreshed.
    pub fn turn(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = clamp_pitch(self.pitch + delta_pitch);
    }

    /// Accumulate roll. Takes effect on the next `refresh`.
    pub fn add_roll(&mut self, delta: f32) {
        self.roll += delta;
    }

    /// Recompute rotation and basis from the current angles
    pub fn refresh(&mut self) {
        self.rotation = compose(self.yaw, self.pitch);
        self.forward = self.rotation.rotate(LOCAL_FORWARD).normalize();

        let level_right = self.rotation.rotate(LOCAL_RIGHT).normalize();
        let twist = Quaternion::from_angle_axis(self.roll, self.forward);
        self.right = twist.rotate(level_right).normalize();
        self.up = twist
            .rotate(level_right.cross(self.forward).normalize())
            .normalize();
    }
}
