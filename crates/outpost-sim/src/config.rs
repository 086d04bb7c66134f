//! Configuration for simulation runs.

/// Tuning knobs for the actor simulator. All rates are per simulated second.
#[derive(Debug, Clone, Copy)]
pub struct ActorConfig {
    /// Hit points regained per second while injured.
    pub heal_rate: f64,
    /// Maximum idle drift speed in world units per second.
    pub wander_speed: f64,
    /// Expected idle-to-working transitions per second.
    pub idle_work_rate: f64,
    /// Expected working-to-idle transitions per second.
    pub work_idle_rate: f64,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            heal_rate: 1.0,
            wander_speed: 5.0,
            idle_work_rate: 0.05,
            work_idle_rate: 0.05,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for deterministic runs.
    pub seed: u64,
    /// Minimum simulated seconds between dilemma presentations.
    pub dilemma_cooldown: f64,
    /// Expected dilemma-trigger attempts per simulated second once the
    /// cooldown has elapsed.
    pub dilemma_rate: f64,
    /// Maximum event log size (oldest entries dropped when exceeded).
    /// 0 = unlimited.
    pub max_events: usize,
    /// Actor simulator tuning.
    pub actors: ActorConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dilemma_cooldown: 15.0,
            dilemma_rate: 0.2,
            max_events: 0,
            actors: ActorConfig::default(),
        }
    }
}

impl SimConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the dilemma cooldown in simulated seconds.
    pub fn with_dilemma_cooldown(mut self, seconds: f64) -> Self {
        self.dilemma_cooldown = seconds;
        self
    }

    /// Set the dilemma trigger rate per simulated second.
    pub fn with_dilemma_rate(mut self, rate: f64) -> Self {
        self.dilemma_rate = rate;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Set the actor simulator tuning.
    pub fn with_actors(mut self, actors: ActorConfig) -> Self {
        self.actors = actors;
        self
    }
}
