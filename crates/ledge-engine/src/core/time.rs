/// Sanitize a raw frame delta: non-finite or negative samples become zero,
/// everything else is capped at `max_dt`.
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_dt)
    }
}

/// Variable-step frame clock.
/// Clamps each frame delta so a stalled tab cannot produce one huge step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Cap on a single tick's delta.
    max_dt: f32,
    /// Ticks advanced since creation or the last reset.
    ticks: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            ticks: 0,
        }
    }

    /// Record one frame. Returns the clamped delta to simulate with.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        let dt = clamp_dt(frame_dt, self.max_dt);
        self.ticks += 1;
        dt
    }

    pub fn set_max_dt(&mut self, max_dt: f32) {
        self.max_dt = max_dt;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_frame_is_capped() {
        let mut clock = FrameClock::new(0.033);
        assert_eq!(clock.advance(0.5), 0.033);
        assert_eq!(clock.ticks(), 1);
    }

    #[test]
    fn short_frame_passes_through() {
        let mut clock = FrameClock::new(0.033);
        assert_eq!(clock.advance(0.016), 0.016);
    }

    #[test]
    fn bad_samples_become_zero() {
        assert_eq!(clamp_dt(-0.01, 0.033), 0.0);
        assert_eq!(clamp_dt(f32::NAN, 0.033), 0.0);
        assert_eq!(clamp_dt(f32::INFINITY, 0.033), 0.0);
    }

    #[test]
    fn reset_clears_tick_count() {
        let mut clock = FrameClock::new(0.033);
        clock.advance(0.010);
        clock.advance(1.0);
        assert_eq!(clock.ticks(), 2);
        clock.reset();
        assert_eq!(clock.ticks(), 0);
    }
}
