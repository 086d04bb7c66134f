//! Per-pawn state transitions each tick.

use rand::Rng;
use rand::rngs::StdRng;

use outpost_core::{Pawn, PawnStatus};

use crate::config::ActorConfig;

/// Advances pawn state by one time delta.
///
/// `step` is a pure function of its inputs plus the RNG: it never mutates
/// the pawns it is given and returns a fresh collection. Probabilistic
/// transitions use a per-call draw scaled by `dt`, so over many ticks the
/// expected transition rate matches the configured per-second rate
/// regardless of tick length.
#[derive(Debug, Clone)]
pub struct ActorSimulator {
    config: ActorConfig,
}

impl ActorSimulator {
    /// Create a simulator with the given tuning.
    pub fn new(config: ActorConfig) -> Self {
        Self { config }
    }

    /// The active tuning.
    pub fn config(&self) -> &ActorConfig {
        &self.config
    }

    /// Advance every pawn by `dt` simulated seconds.
    pub fn step(&self, pawns: &[Pawn], dt: f64, rng: &mut StdRng) -> Vec<Pawn> {
        pawns.iter().map(|p| self.step_pawn(p, dt, rng)).collect()
    }

    fn step_pawn(&self, pawn: &Pawn, dt: f64, rng: &mut StdRng) -> Pawn {
        let mut next = pawn.clone();
        match pawn.status {
            // Dead is absorbing: nothing about the pawn ever changes again.
            PawnStatus::Dead => {}

            PawnStatus::Injured => {
                if let Some(vitals) = next.vitals.as_mut() {
                    vitals.heal(self.config.heal_rate * dt);
                    // Fully healed pawns rejoin the idle pool on their own;
                    // no explicit clear action is required.
                    if vitals.is_full() {
                        next.status = PawnStatus::Idle;
                    }
                }
            }

            PawnStatus::Idle => {
                // Cosmetic drift, bounded by wander_speed per axis.
                if let Some(pos) = next.position.as_mut() {
                    let reach = self.config.wander_speed * dt;
                    pos.x += rng.random_range(-reach..=reach);
                    pos.y += rng.random_range(-reach..=reach);
                }
                if self.draw(rng, self.config.idle_work_rate * dt) {
                    next.status = PawnStatus::Working;
                }
            }

            PawnStatus::Working => {
                if self.draw(rng, self.config.work_idle_rate * dt) {
                    next.status = PawnStatus::Idle;
                }
            }
        }
        next
    }

    fn draw(&self, rng: &mut StdRng, chance: f64) -> bool {
        rng.random::<f64>() < chance.min(1.0)
    }
}

impl Default for ActorSimulator {
    fn default() -> Self {
        Self::new(ActorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outpost_core::Pawn;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn sim(config: ActorConfig) -> ActorSimulator {
        ActorSimulator::new(config)
    }

    #[test]
    fn input_collection_is_untouched() {
        let pawns = vec![
            Pawn::new("Jax").with_vitals(50.0, 100.0).with_position(0.0, 0.0),
            Pawn::new("Kael").with_status(PawnStatus::Working),
        ];
        let before = pawns.clone();
        let _ = ActorSimulator::default().step(&pawns, 1.0, &mut rng());
        assert_eq!(pawns, before);
    }

    #[test]
    fn dead_pawns_never_change() {
        let pawns = vec![
            Pawn::new("Ghost")
                .with_status(PawnStatus::Dead)
                .with_vitals(10.0, 100.0)
                .with_position(3.0, 4.0),
        ];
        let mut current = pawns.clone();
        let sim = ActorSimulator::default();
        let mut rng = rng();
        for _ in 0..200 {
            current = sim.step(&current, 1.0, &mut rng);
        }
        assert_eq!(current, pawns);
    }

    #[test]
    fn injured_pawns_heal_and_clamp() {
        let pawns = vec![
            Pawn::new("Mira")
                .with_status(PawnStatus::Injured)
                .with_vitals(90.0, 100.0),
        ];
        let sim = sim(ActorConfig {
            heal_rate: 4.0,
            ..ActorConfig::default()
        });
        let stepped = sim.step(&pawns, 1.0, &mut rng());
        assert_eq!(stepped[0].vitals.unwrap().hp, 94.0);
        assert_eq!(stepped[0].status, PawnStatus::Injured);

        // A long stall delta heals to full but never past it.
        let stepped = sim.step(&pawns, 100.0, &mut rng());
        assert_eq!(stepped[0].vitals.unwrap().hp, 100.0);
    }

    #[test]
    fn fully_healed_pawns_return_to_idle() {
        let pawns = vec![
            Pawn::new("Mira")
                .with_status(PawnStatus::Injured)
                .with_vitals(99.5, 100.0),
        ];
        let stepped = ActorSimulator::default().step(&pawns, 1.0, &mut rng());
        assert_eq!(stepped[0].status, PawnStatus::Idle);
    }

    #[test]
    fn idle_drift_is_bounded_by_wander_speed() {
        let pawns = vec![Pawn::new("Jax").with_position(0.0, 0.0)];
        let sim = sim(ActorConfig {
            idle_work_rate: 0.0,
            ..ActorConfig::default()
        });
        let mut rng = rng();
        let mut current = pawns;
        for _ in 0..100 {
            let prev = current[0].position.unwrap();
            current = sim.step(&current, 0.5, &mut rng);
            let pos = current[0].position.unwrap();
            // wander_speed 5.0 * dt 0.5 = 2.5 per axis
            assert!((pos.x - prev.x).abs() <= 2.5);
            assert!((pos.y - prev.y).abs() <= 2.5);
        }
    }

    #[test]
    fn certain_rate_always_transitions() {
        let sim = sim(ActorConfig {
            idle_work_rate: 1.0,
            work_idle_rate: 1.0,
            ..ActorConfig::default()
        });
        let idle = vec![Pawn::new("Jax")];
        let stepped = sim.step(&idle, 1.0, &mut rng());
        assert_eq!(stepped[0].status, PawnStatus::Working);
        let stepped = sim.step(&stepped, 1.0, &mut rng());
        assert_eq!(stepped[0].status, PawnStatus::Idle);
    }

    #[test]
    fn zero_rate_never_transitions() {
        let sim = sim(ActorConfig {
            idle_work_rate: 0.0,
            work_idle_rate: 0.0,
            ..ActorConfig::default()
        });
        let mut current = vec![Pawn::new("Jax"), Pawn::new("Kael").with_status(PawnStatus::Working)];
        let mut rng = rng();
        for _ in 0..100 {
            current = sim.step(&current, 1.0, &mut rng);
        }
        assert_eq!(current[0].status, PawnStatus::Idle);
        assert_eq!(current[1].status, PawnStatus::Working);
    }

    #[test]
    fn same_seed_same_outcome() {
        let pawns = vec![
            Pawn::new("Jax").with_position(0.0, 0.0),
            Pawn::new("Mira")
                .with_status(PawnStatus::Injured)
                .with_vitals(10.0, 100.0),
        ];
        let sim = ActorSimulator::default();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut current = pawns.clone();
            for _ in 0..50 {
                current = sim.step(&current, 0.25, &mut rng);
            }
            current
        };
        assert_eq!(run(7), run(7));
    }
}
