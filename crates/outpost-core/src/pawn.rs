//! Pawns: the simulated colonists.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PawnId(pub Uuid);

impl PawnId {
    /// Generate a fresh random pawn id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PawnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PawnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What a pawn is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PawnStatus {
    /// Unassigned; wanders and may pick up work.
    #[default]
    Idle,
    /// Assigned to a job.
    Working,
    /// Hurt; regenerates hp over time.
    Injured,
    /// Dead. Absorbing — a dead pawn never changes again.
    Dead,
}

impl fmt::Display for PawnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Working => write!(f, "working"),
            Self::Injured => write!(f, "injured"),
            Self::Dead => write!(f, "dead"),
        }
    }
}

/// Hit points. `hp` never exceeds `max_hp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Current hit points.
    pub hp: f64,
    /// Maximum hit points.
    pub max_hp: f64,
}

impl Vitals {
    /// Create vitals, clamping `hp` into `0.0..=max_hp`.
    pub fn new(hp: f64, max_hp: f64) -> Self {
        Self {
            hp: hp.clamp(0.0, max_hp),
            max_hp,
        }
    }

    /// Restore hit points, clamped to `max_hp`.
    pub fn heal(&mut self, amount: f64) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// True when at full health.
    pub fn is_full(&self) -> bool {
        self.hp >= self.max_hp
    }
}

/// A 2D position. Cosmetic only; wandering has no gameplay effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate in world units.
    pub x: f64,
    /// Vertical coordinate in world units.
    pub y: f64,
}

/// A simulated colonist.
///
/// Mutated only by the actor simulator, once per tick; every other component
/// sees pawns as read-only values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pawn {
    /// Unique id.
    pub id: PawnId,
    /// Display name.
    pub name: String,
    /// Current activity status.
    pub status: PawnStatus,
    /// Hit points, if this pawn tracks health.
    pub vitals: Option<Vitals>,
    /// World position, if this pawn is placed on the map.
    pub position: Option<Position>,
}

impl Pawn {
    /// Create an idle pawn with the given name and no vitals or position.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PawnId::new(),
            name: name.into(),
            status: PawnStatus::Idle,
            vitals: None,
            position: None,
        }
    }

    /// Set vitals (builder style).
    pub fn with_vitals(mut self, hp: f64, max_hp: f64) -> Self {
        self.vitals = Some(Vitals::new(hp, max_hp));
        self
    }

    /// Set position (builder style).
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position { x, y });
        self
    }

    /// Set status (builder style).
    pub fn with_status(mut self, status: PawnStatus) -> Self {
        self.status = status;
        self
    }

    /// True if this pawn is dead.
    pub fn is_dead(&self) -> bool {
        self.status == PawnStatus::Dead
    }
}
