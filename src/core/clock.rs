use std::time::Instant;

/// Monotonic time source in seconds
pub trait TimeSource {
    fn now(&self) -> f64;
}

/// Seconds elapsed since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart from zero
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Clock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
