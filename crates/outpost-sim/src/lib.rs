//! Tick-driven colony simulation for Outpost.
//!
//! The [`Simulation`] orchestrator owns the single authoritative game state
//! (pause flag, time scale, elapsed time, pawns, inventory, active dilemma)
//! and drives the actor simulator and narrative trigger on each tick. It is
//! single-threaded and non-reentrant: all mutation happens inside `tick` or
//! a named action method, and every other component sees either owned inputs
//! or read-only views. Stochastic behavior flows through one seeded RNG, so
//! identical seeds replay identical runs.

/// Per-pawn state transitions each tick.
pub mod actor;
/// Pause flag, time scale, and simulation-time bookkeeping.
pub mod clock;
/// Configuration for simulation runs.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Game events, the synchronous event channel, and the event log.
pub mod events;
/// Condition-gated dilemma rules and the narrative trigger.
pub mod narrative;
/// The top-level simulation orchestrator.
pub mod simulation;

/// Re-export of [`actor::ActorSimulator`].
pub use actor::ActorSimulator;
/// Re-export of [`clock::SimClock`].
pub use clock::SimClock;
/// Re-exports of [`config::ActorConfig`] and [`config::SimConfig`].
pub use config::{ActorConfig, SimConfig};
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of the event types.
pub use events::{EventChannel, EventLog, GameEvent, LogEntry, SubscriberId};
/// Re-exports of the narrative types.
pub use narrative::{DilemmaRule, DilemmaTemplate, NarrativeTrigger, TriggerCondition, WorldView};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
