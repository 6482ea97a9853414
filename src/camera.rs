use glam::{Mat4, Vec3};

use crate::config::{CameraConfig, CaptureMode};
use crate::core::{InputSample, InputSampler, InputSource};
use crate::math::{Projection, ProjectionParams};
use crate::orientation::Orientation;
use crate::traits::ViewCamera;
use crate::types::CameraUniform;

/// Wheel deltas at or below this are treated as no scroll
const WHEEL_EPSILON: f32 = 1e-5;

/// Free-fly camera driven by mouse, keyboard and wheel.
///
/// Call [`update`](Self::update) exactly once per rendered frame, after the
/// host has polled platform events into the input source.
#[derive(Debug, Clone)]
pub struct CameraController {
    position: Vec3,
    orientation: Orientation,
    projection: Projection,
    mode: CaptureMode,
    sampler: InputSampler,
    config: CameraConfig,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl CameraController {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Orientation::default(),
            projection: Projection::new(ProjectionParams::new(
                config.fovy,
                config.aspect,
                config.near,
                config.far,
            )),
            mode: config.initial_mode,
            sampler: InputSampler::new(),
            config,
        }
    }

    /// Default tuning with the given field of view and aspect ratio
    pub fn with_perspective(fovy: f32, aspect: f32) -> Self {
        Self::new(CameraConfig::with_perspective(fovy, aspect))
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_orientation(mut self, yaw: f32, pitch: f32, roll: f32) -> Self {
        self.orientation = Orientation::new(yaw, pitch, roll);
        self
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Live tuning of sensitivities and bindings. Projection fields here are
    /// only read at construction; use `set_perspective` to change them later.
    pub fn config_mut(&mut self) -> &mut CameraConfig {
        &mut self.config
    }

    pub fn capture_mode(&self) -> CaptureMode {
        self.mode
    }

    /// Force a capture mode and ask the input source to match the pointer to it
    pub fn set_capture_mode<S: InputSource + ?Sized>(&mut self, mode: CaptureMode, input: &mut S) {
        if self.mode != mode {
            log::debug!("camera capture mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        input.set_cursor_captured(mode.is_captured());
    }

    /// Re-send the current capture mode, e.g. once the window exists
    pub fn sync_cursor<S: InputSource + ?Sized>(&self, input: &mut S) {
        input.set_cursor_captured(self.mode.is_captured());
    }

    /// Advance one frame.
    ///
    /// The toggle key is polled first, then input is sampled whether or not
    /// the camera is captured. Sampling while `Free` keeps the cursor and time
    /// baselines current so resuming capture never jumps. Deltas sampled on
    /// the frame of a flip are discarded.
    pub fn update<S: InputSource + ?Sized>(&mut self, input: &mut S, now: f64) {
        let toggled = input.was_pressed(self.config.bindings.toggle_capture);
        if toggled {
            let mode = self.mode.toggled();
            self.set_capture_mode(mode, input);
        }

        let sample = self.sampler.sample(input, now);
        if toggled || self.mode == CaptureMode::Free {
            return;
        }

        self.integrate(&sample);
    }

    /// Apply one frame's input to orientation, position and zoom
    pub fn integrate(&mut self, sample: &InputSample) {
        let dt = sample.dt;
        let config = self.config;
        let bindings = config.bindings;
        let keys = &sample.keys;

        let look = sample.cursor_delta * config.mouse_sensitivity * dt;
        let pitch_sign = if config.invert_y { 1.0 } else { -1.0 };
        self.orientation.turn(-look.x, pitch_sign * look.y);
        self.orientation.refresh();

        let roll_step = dt * config.keyboard_sensitivity;
        if keys.is_down(bindings.roll_left) {
            self.orientation.add_roll(-roll_step);
        }
        if keys.is_down(bindings.roll_right) {
            self.orientation.add_roll(roll_step);
        }

        // No diagonal normalisation: held keys add up.
        let step = config.keyboard_sensitivity * dt;
        let forward = self.orientation.forward();
        let right = self.orientation.right();
        let up = self.orientation.up();
        let moves = [
            (bindings.forward, forward),
            (bindings.backward, -forward),
            (bindings.right, right),
            (bindings.left, -right),
            (bindings.up, up),
            (bindings.down, -up),
        ];
        for (button, direction) in moves {
            if keys.is_down(button) {
                self.position += direction * step;
            }
        }

        if sample.wheel_delta.abs() > WHEEL_EPSILON {
            let fovy = self.projection.fovy() + sample.wheel_delta * dt * config.wheel_sensitivity;
            self.projection.set_fovy(fovy);
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation.forward()
    }

    pub fn right(&self) -> Vec3 {
        self.orientation.right()
    }

    pub fn up(&self) -> Vec3 {
        self.orientation.up()
    }

    pub fn fovy(&self) -> f32 {
        self.projection.fovy()
    }

    pub fn projection_params(&self) -> &ProjectionParams {
        self.projection.params()
    }

    /// Bumped every time the projection matrix is rebuilt
    pub fn projection_revision(&self) -> u64 {
        self.projection.revision()
    }

    /// Returns `true` if the projection had to be rebuilt
    pub fn set_perspective(&mut self, fovy: f32, aspect: f32, near: f32, far: f32) -> bool {
        self.projection.set_perspective(fovy, aspect, near, far)
    }

    pub fn set_aspect(&mut self, aspect: f32) -> bool {
        self.projection.set_aspect(aspect)
    }

    pub fn view(&self) -> Mat4 {
        let forward = self.orientation.forward();
        Mat4::look_at_rh(self.position, self.position + forward, self.orientation.up())
    }

    pub fn projection(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            position: self.position.to_array(),
            _pad1: 0.0,
            forward: self.forward().to_array(),
            _pad2: 0.0,
            right: self.right().to_array(),
            _pad3: 0.0,
            up: self.up().to_array(),
            fovy: self.fovy(),
        }
    }
}

impl ViewCamera for CameraController {
    fn view(&self) -> Mat4 {
        CameraController::view(self)
    }

    fn projection(&self) -> Mat4 {
        CameraController::projection(self)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.orientation.forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Button, InputState, KeyState};
    use glam::Vec2;

    fn sample(cursor_delta: Vec2, dt: f32) -> InputSample {
        InputSample {
            cursor_delta,
            dt,
            ..InputSample::default()
        }
    }

    fn holding(buttons: &[Button], dt: f32) -> InputSample {
        InputSample {
            keys: KeyState {
                down: buttons.iter().copied().collect(),
                ..KeyState::default()
            },
            dt,
            ..InputSample::default()
        }
    }

    #[test]
    fn starts_captured_at_origin_looking_down_neg_z() {
        let camera = CameraController::default();
        assert_eq!(camera.capture_mode(), CaptureMode::Captured);
        assert_eq!(camera.position(), Vec3::ZERO);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn cursor_right_turns_right() {
        let mut camera = CameraController::default();
        camera.integrate(&sample(Vec2::new(10.0, 0.0), 0.1));
        assert!((camera.orientation().yaw() + 0.5).abs() < 1e-6);
        assert!(camera.forward().x > 0.0);
    }

    #[test]
    fn cursor_up_looks_up_unless_inverted() {
        let mut camera = CameraController::default();
        camera.integrate(&sample(Vec2::new(0.0, -10.0), 0.1));
        assert!(camera.orientation().pitch() > 0.0);

        let mut camera = CameraController::new(CameraConfig {
            invert_y: true,
            ..CameraConfig::default()
        });
        camera.integrate(&sample(Vec2::new(0.0, -10.0), 0.1));
        assert!(camera.orientation().pitch() < 0.0);
    }

    #[test]
    fn forward_key_moves_along_forward() {
        let mut camera = CameraController::default();
        camera.integrate(&holding(&[Button::KeyW], 0.5));
        assert!((camera.position() - Vec3::new(0.0, 0.0, -2.5)).length() < 1e-5);
    }

    #[test]
    fn diagonal_motion_is_not_normalised() {
        let mut camera = CameraController::default();
        camera.integrate(&holding(&[Button::KeyW, Button::KeyD], 1.0));
        let expected = (5.0f32 * 5.0 * 2.0).sqrt();
        assert!((camera.position().length() - expected).abs() < 1e-4);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut camera = CameraController::default();
        camera.integrate(&holding(&[Button::Space, Button::Shift], 1.0));
        assert!(camera.position().length() < 1e-6);
    }

    #[test]
    fn roll_keys_change_roll_in_opposite_directions() {
        let mut camera = CameraController::default();
        camera.integrate(&holding(&[Button::KeyE], 0.1));
        assert!((camera.orientation().roll() - 0.5).abs() < 1e-6);
        camera.integrate(&holding(&[Button::KeyQ], 0.2));
        assert!((camera.orientation().roll() + 0.5).abs() < 1e-6);
    }

    #[test]
    fn wheel_zoom_rebuilds_projection() {
        let mut camera = CameraController::with_perspective(1.0, 1.0);
        let before = camera.projection();
        camera.integrate(&InputSample {
            wheel_delta: 1.0,
            dt: 0.01,
            ..InputSample::default()
        });
        assert!((camera.fovy() - 1.2).abs() < 1e-5);
        assert_eq!(camera.projection_revision(), 1);
        assert_ne!(camera.projection(), before);
    }

    #[test]
    fn view_projection_is_product() {
        let camera = CameraController::default()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_orientation(0.4, -0.2, 0.1);
        let expected = camera.projection() * camera.view();
        assert_eq!(camera.view_projection(), expected);
        assert_eq!(ViewCamera::view_projection(&camera), expected);
    }

    #[test]
    fn view_maps_position_to_origin() {
        let camera = CameraController::default()
            .with_position(Vec3::new(4.0, -1.0, 2.0))
            .with_orientation(1.0, 0.3, 0.0);
        let p = camera.view().transform_point3(camera.position());
        assert!(p.length() < 1e-5);
        let ahead = camera
            .view()
            .transform_point3(camera.position() + camera.forward());
        assert!((ahead - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn toggle_requests_cursor_state() {
        let mut camera = CameraController::default();
        let mut input = InputState::new();
        input.button_pressed(Button::Tab);
        camera.update(&mut input, 0.0);
        assert_eq!(camera.capture_mode(), CaptureMode::Free);
        assert_eq!(input.cursor_captured(), Some(false));
    }

    #[test]
    fn uniform_mirrors_camera() {
        let camera = CameraController::default().with_position(Vec3::new(1.0, 2.0, 3.0));
        let uniform = camera.uniform();
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.fovy, camera.fovy());
        assert_eq!(uniform.view_proj, camera.view_projection().to_cols_array_2d());
    }
}
