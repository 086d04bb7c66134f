//! Pause flag, time scale, and simulation-time bookkeeping.

use crate::error::{SimError, SimResult};

/// Tracks simulation time: pause state, the time-scale multiplier, monotonic
/// elapsed game time, and the cooldown reference point for dilemmas.
///
/// Wall-clock deltas arrive from an external frame driver at irregular
/// intervals; the clock converts them to simulation time so every rate and
/// cooldown in the game behaves the same at any play speed.
#[derive(Debug, Clone)]
pub struct SimClock {
    paused: bool,
    time_scale: f64,
    game_time: f64,
    last_dilemma_at: f64,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimClock {
    /// Create a running clock at time zero with scale 1.
    pub fn new() -> Self {
        Self {
            paused: false,
            time_scale: 1.0,
            game_time: 0.0,
            last_dilemma_at: 0.0,
        }
    }

    /// Advance by a wall-clock delta. Returns the effective simulation-time
    /// delta, or `None` when paused or the delta is not positive (a stalled
    /// or misbehaving driver must never move time backwards).
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        if self.paused || dt <= 0.0 {
            return None;
        }
        let effective = dt * self.time_scale;
        self.game_time += effective;
        Some(effective)
    }

    /// Flip the pause flag. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Pause unconditionally.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Set the time scale. Also clears the pause flag — changing speed
    /// implies intent to resume.
    pub fn set_time_scale(&mut self, value: f64) -> SimResult<()> {
        if value <= 0.0 || !value.is_finite() {
            return Err(SimError::InvalidTimeScale(value));
        }
        self.time_scale = value;
        self.paused = false;
        Ok(())
    }

    /// True while paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The current time-scale multiplier.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Total elapsed simulation time in seconds. Monotonic while unpaused.
    pub fn game_time(&self) -> f64 {
        self.game_time
    }

    /// True once at least `cooldown` seconds of simulation time have passed
    /// since the last dilemma (or since the start of the run).
    pub fn cooldown_elapsed(&self, cooldown: f64) -> bool {
        self.game_time - self.last_dilemma_at >= cooldown
    }

    /// Restart the dilemma cooldown from the current game time.
    pub fn mark_dilemma(&mut self) {
        self.last_dilemma_at = self.game_time;
    }
}
