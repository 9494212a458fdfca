use web_time::Instant;

/// Per-frame delta-time measurement with a smoothed FPS estimate.
pub struct FrameTiming {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a frame timer starting now.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05, /* 5% new value, 95% old value for smooth
                              * display */
        }
    }

    /// Call once per frame. Returns the seconds elapsed since the
    /// previous call and folds the sample into the FPS average.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if delta > 0.0 {
            let instant_fps = 1.0 / delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        delta
    }

    /// Smoothed frames-per-second estimate.
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_returns_nonnegative_delta() {
        let mut timing = FrameTiming::new();
        let dt = timing.tick();
        assert!(dt >= 0.0);
    }

    #[test]
    fn fps_stays_positive_under_rapid_ticks() {
        let mut timing = FrameTiming::new();
        for _ in 0..10 {
            let _ = timing.tick();
        }
        assert!(timing.fps() > 0.0);
    }
}
