use std::time::Instant;

/// Longest frame delta handed to the simulation, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Frame clock - measures time between redraws
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_delta: f32,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta: MAX_FRAME_DELTA,
        }
    }

    /// Seconds since the previous tick, capped at `max_delta` so a stall
    /// (window drag, breakpoint) doesn't fling the camera across the world
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(self.max_delta)
    }

    /// Restart timing from now, e.g. after the window is recreated
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
