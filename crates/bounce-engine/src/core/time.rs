/// Fixed timestep accumulator.
/// Turns variable host frame times into a whole number of fixed ticks.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per tick, in seconds.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Most ticks a single frame may produce.
    max_steps: u32,
    /// Whether the last frame owed more ticks than `max_steps`.
    capped: bool,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
            capped: false,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        let steps = (self.accumulator / self.dt) as u32;
        // Cap to prevent spiral of death; the excess is dropped, not carried.
        self.capped = steps > self.max_steps;
        if self.capped {
            self.accumulator = 0.0;
            return self.max_steps;
        }
        self.accumulator = (self.accumulator - steps as f32 * self.dt).max(0.0);
        steps
    }

    /// Whether the last `accumulate` dropped time to stay within the step cap.
    pub fn capped(&self) -> bool {
        self.capped
    }

    /// Fraction of a tick left in the accumulator (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.005;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(DT, 10);
        assert_eq!(ts.accumulate(DT), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(DT, 10);
        assert_eq!(ts.accumulate(0.002), 0);
        assert_eq!(ts.accumulate(0.004), 1);
    }

    #[test]
    fn caps_at_max_steps() {
        let mut ts = FixedTimestep::new(DT, 10);
        assert_eq!(ts.accumulate(1.0), 10);
        assert!(ts.capped());
        let mut ts = FixedTimestep::new(DT, 3);
        assert_eq!(ts.accumulate(1.0), 3);
        assert!(ts.capped());
    }

    #[test]
    fn exactly_max_steps_is_not_capped() {
        // Quarter-second ticks keep the arithmetic exact.
        let mut ts = FixedTimestep::new(0.25, 4);
        assert_eq!(ts.accumulate(1.0), 4);
        assert!(!ts.capped());
        assert_eq!(ts.accumulate(1.5), 4);
        assert!(ts.capped());
        assert_eq!(ts.accumulate(0.5), 2);
        assert!(!ts.capped());
    }

    #[test]
    fn negative_frame_time_ignored() {
        let mut ts = FixedTimestep::new(DT, 10);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn alpha_is_between_zero_and_one() {
        let mut ts = FixedTimestep::new(DT, 10);
        ts.accumulate(0.012);
        let a = ts.alpha();
        assert!(a >= 0.0 && a <= 1.0, "alpha was {}", a);
    }
}
