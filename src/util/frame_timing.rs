use web_time::Instant;

/// Source of per-frame elapsed time.
///
/// Implementations report milliseconds since the previous tick. The value
/// is always finite and never negative; the first tick measures from
/// construction.
pub trait Clock {
    /// Advance the clock and return the elapsed milliseconds.
    fn tick(&mut self) -> f32;
}

/// Wall-clock frame timer with a smoothed FPS readout.
pub struct FrameClock {
    /// Last frame timestamp
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock whose first tick measures from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        // saturates to zero if the platform clock ever steps backwards
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        sanitize_ms(frame_time * 1000.0)
    }
}

/// Clock that advances by a constant step, for replay and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepClock {
    step_ms: f32,
}

impl FixedStepClock {
    /// Create a clock reporting `step_ms` per tick. Negative or non-finite
    /// steps are treated as zero.
    #[must_use]
    pub fn new(step_ms: f32) -> Self {
        Self {
            step_ms: sanitize_ms(step_ms),
        }
    }

    /// Step reported by every tick.
    #[must_use]
    pub fn step_ms(&self) -> f32 {
        self.step_ms
    }
}

impl Clock for FixedStepClock {
    fn tick(&mut self) -> f32 {
        self.step_ms
    }
}

fn sanitize_ms(ms: f32) -> f32 {
    if ms.is_finite() {
        ms.max(0.0)
    } else {
        0.0
    }
}
