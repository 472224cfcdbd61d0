//! Fixed-timestep frame clock
//!
//! Converts variable wall-clock elapsed time into a bounded number of fixed
//! simulation steps. The simulation itself never measures time; the host
//! feeds elapsed seconds in and runs `tick` once per step handed back.

/// Accumulator-based fixed-rate clock.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step_dt: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl FrameClock {
    /// `step_dt` is the fixed simulation timestep; `max_substeps` caps how
    /// many steps a single frame may produce after a long stall.
    pub fn new(step_dt: f32, max_substeps: u32) -> Self {
        Self {
            step_dt,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// 60 Hz clock using the crate defaults.
    pub fn standard() -> Self {
        Self::new(crate::consts::SIM_DT, crate::consts::MAX_SUBSTEPS)
    }

    /// The fixed per-step delta to pass into `tick`.
    pub fn step_dt(&self) -> f32 {
        self.step_dt
    }

    /// Feed elapsed wall-clock seconds, get back how many fixed steps to run.
    ///
    /// Non-finite or negative input is ignored (zero steps, accumulator
    /// unchanged). Excess time beyond `max_substeps` steps is dropped so a
    /// long stall cannot trigger a catch-up spiral.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return 0;
        }
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step_dt && steps < self.max_substeps {
            self.accumulator -= self.step_dt;
            steps += 1;
        }
        if steps == self.max_substeps {
            // Drop whatever is left rather than letting it snowball
            self.accumulator = 0.0;
        }
        steps
    }

    /// Discard accumulated time (e.g. after a pause or focus loss).
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FrameClock::new(1.0 / 60.0, 4);
        assert_eq!(clock.advance(1.0 / 120.0), 0);
        assert_eq!(clock.advance(1.0 / 120.0), 1);
    }

    #[test]
    fn test_one_step_per_exact_frame() {
        let mut clock = FrameClock::standard();
        let mut total = 0;
        for _ in 0..60 {
            total += clock.advance(1.0 / 60.0);
        }
        assert_eq!(total, 60);
    }

    #[test]
    fn test_caps_substeps_after_stall() {
        let mut clock = FrameClock::new(1.0 / 60.0, 4);
        assert_eq!(clock.advance(2.0), 4);
        // Leftover time was dropped, not banked
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_rejects_bad_elapsed() {
        let mut clock = FrameClock::standard();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        // A bad sample must not poison the accumulator
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }
}
