/// Seconds between FPS reports
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Averages frame rate over a fixed window and reports once per window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    accumulator: f32,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count one frame. Returns the new average when a window completes.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.accumulator += delta;

        if self.accumulator < self.interval {
            return None;
        }

        self.fps = self.frames as f32 / self.accumulator;
        self.frames = 0;
        self.accumulator = 0.0;
        Some(self.fps)
    }

    /// Most recent average, 0 until the first window completes
    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_time_ms(&self) -> f32 {
        if self.fps > 0.0 {
            1000.0 / self.fps
        } else {
            0.0
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(FPS_UPDATE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_reports_once_per_interval() {
        let mut counter = FpsCounter::new(1.0);

        for _ in 0..7 {
            assert_eq!(counter.tick(0.125), None);
        }
        let fps = counter.tick(0.125).expect("interval should complete");
        assert_eq!(fps, 8.0);
        assert_eq!(counter.fps(), fps);
        assert_eq!(counter.frame_time_ms(), 125.0);

        // Next window starts from scratch
        assert_eq!(counter.tick(0.125), None);
    }

    #[test]
    fn fps_starts_at_zero() {
        let counter = FpsCounter::default();
        assert_eq!(counter.fps(), 0.0);
        assert_eq!(counter.frame_time_ms(), 0.0);
    }

    #[test]
    fn fps_single_long_frame() {
        let mut counter = FpsCounter::new(0.5);
        assert_eq!(counter.tick(2.0), Some(0.5));
        assert_eq!(counter.frame_time_ms(), 2000.0);
    }
}
