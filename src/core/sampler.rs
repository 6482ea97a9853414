use glam::{DVec2, Vec2};

use super::input::{InputSource, KeyState};

/// Per-frame input deltas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub cursor_delta: Vec2,
    pub wheel_delta: f32,
    pub keys: KeyState,
    pub dt: f32,
}

/// Turns an [`InputSource`] into per-frame deltas.
///
/// The cursor delta is derived from absolute positions rather than a
/// relative-motion API, so skipping samples for a while never leaves stale
/// motion queued up.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    last_cursor: Option<DVec2>,
    last_time: Option<f64>,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain this frame's input. The first call reports zero deltas.
    pub fn sample<S: InputSource + ?Sized>(&mut self, source: &mut S, now: f64) -> InputSample {
        let cursor = source.cursor_position();
        let cursor_delta = self
            .last_cursor
            .map_or(Vec2::ZERO, |last| (cursor - last).as_vec2());
        self.last_cursor = Some(cursor);

        let dt = self.last_time.map_or(0.0, |last| (now - last).max(0.0)) as f32;
        self.last_time = Some(match self.last_time {
            Some(last) => now.max(last),
            None => now,
        });

        let wheel_delta = source.take_wheel();
        let keys = source.key_state();
        source.clear_pressed();

        InputSample {
            cursor_delta,
            wheel_delta,
            keys,
            dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Button;
    use crate::core::input_state::InputState;

    #[test]
    fn first_sample_is_zero() {
        let mut input = InputState::new();
        input.cursor_moved(DVec2::new(300.0, 200.0));

        let mut sampler = InputSampler::new();
        let sample = sampler.sample(&mut input, 5.0);
        assert_eq!(sample.cursor_delta, Vec2::ZERO);
        assert_eq!(sample.dt, 0.0);
    }

    #[test]
    fn deltas_are_relative_to_last_sample() {
        let mut input = InputState::new();
        let mut sampler = InputSampler::new();
        sampler.sample(&mut input, 1.0);

        input.cursor_moved(DVec2::new(10.0, -4.0));
        let sample = sampler.sample(&mut input, 1.25);
        assert_eq!(sample.cursor_delta, Vec2::new(10.0, -4.0));
        assert!((sample.dt - 0.25).abs() < 1e-6);

        let sample = sampler.sample(&mut input, 1.25);
        assert_eq!(sample.cursor_delta, Vec2::ZERO);
        assert_eq!(sample.dt, 0.0);
    }

    #[test]
    fn dt_never_negative() {
        let mut input = InputState::new();
        let mut sampler = InputSampler::new();
        sampler.sample(&mut input, 2.0);
        assert_eq!(sampler.sample(&mut input, 1.0).dt, 0.0);
        // the earlier timestamp must not become the new baseline
        assert!((sampler.sample(&mut input, 2.5).dt - 0.5).abs() < 1e-6);
    }

    #[test]
    fn wheel_is_drained() {
        let mut input = InputState::new();
        let mut sampler = InputSampler::new();
        input.wheel_scrolled(2.0);
        assert_eq!(sampler.sample(&mut input, 0.0).wheel_delta, 2.0);
        assert_eq!(sampler.sample(&mut input, 0.1).wheel_delta, 0.0);
    }

    #[test]
    fn presses_are_seen_by_one_sample() {
        let mut input = InputState::new();
        let mut sampler = InputSampler::new();
        input.button_pressed(Button::Tab);

        let first = sampler.sample(&mut input, 0.0);
        assert!(first.keys.was_pressed(Button::Tab));
        assert!(first.keys.is_down(Button::Tab));

        let second = sampler.sample(&mut input, 0.1);
        assert!(!second.keys.was_pressed(Button::Tab));
        assert!(second.keys.is_down(Button::Tab));
    }

    #[test]
    fn far_cursor_still_gives_exact_small_deltas() {
        let mut input = InputState::new();
        let mut sampler = InputSampler::new();
        sampler.sample(&mut input, 0.0);

        // a long turn in one direction, well past f32's integer range
        input.cursor_moved(DVec2::new(17_825_792.0, -16_777_216.0));
        sampler.sample(&mut input, 0.1);

        input.cursor_moved(DVec2::new(17_825_793.0, -16_777_216.3));
        let sample = sampler.sample(&mut input, 0.2);
        assert!((sample.cursor_delta.x - 1.0).abs() < 1e-6);
        assert!((sample.cursor_delta.y + 0.3).abs() < 1e-4);
    }
}
