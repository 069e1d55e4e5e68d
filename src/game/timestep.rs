//! Fixed-timestep driver
//!
//! Wall-clock time is accumulated and the simulation is advanced in
//! constant-size steps, so physics behaves the same at any frame rate.
//! A slow frame runs several steps; a fast frame may run none and simply
//! carry its time over. Rendering always shows the latest stepped state
//! (no interpolation).

/// Simulation step in seconds (60 Hz). A tuned literal, not `1.0 / 60.0`.
pub const FIXED_TIMESTEP: f32 = 0.016_666_67;

/// Relative slack when counting whole steps, so `n * FIXED_TIMESTEP`
/// rounded to f32 still counts as `n` steps.
const STEP_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Default)]
pub struct FixedTimestep {
    /// Clock reading from the previous frame (seconds)
    previous_ticks: f64,
    /// Time not yet consumed by a step (always in `[0, FIXED_TIMESTEP)` after advancing)
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring from `now` instead of from zero
    pub fn starting_at(now: f64) -> Self {
        Self {
            previous_ticks: now,
            accumulator: 0.0,
        }
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn previous_ticks(&self) -> f64 {
        self.previous_ticks
    }

    /// Feed the current clock reading (seconds) and run as many fixed steps
    /// as the elapsed time allows. Returns the number of steps run.
    ///
    /// A clock that goes backwards counts as zero elapsed time.
    pub fn advance<F: FnMut(f32)>(&mut self, now: f64, step: F) -> u32 {
        let delta = (now - self.previous_ticks).max(0.0) as f32;
        self.previous_ticks = now;
        self.advance_by(delta, step)
    }

    /// Same as `advance` but with the elapsed time given directly.
    pub fn advance_by<F: FnMut(f32)>(&mut self, delta_time: f32, mut step: F) -> u32 {
        if delta_time.is_finite() && delta_time > 0.0 {
            self.accumulator += delta_time;
        }

        // Whole steps are counted in one go. Subtracting one step at a time
        // in f32 drifts below a step and loses the last one.
        let step_len = FIXED_TIMESTEP as f64;
        let ratio = self.accumulator as f64 / step_len;
        let steps = (ratio + ratio.max(1.0) * STEP_TOLERANCE).floor() as u32;
        let remainder = self.accumulator as f64 - steps as f64 * step_len;
        self.accumulator = remainder.max(0.0) as f32;

        for _ in 0..steps {
            step(FIXED_TIMESTEP);
        }
        steps
    }
}
