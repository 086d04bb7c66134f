//! Crafted items.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blueprint::SpriteLayer;
use crate::stats::StatBlock;

/// Process-unique identifier for a crafted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a fresh random item id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build an id from raw bits, used by the synthesis engine to mint ids
    /// from a seeded RNG so whole runs stay reproducible.
    pub fn from_bits(bits: u128) -> Self {
        Self(Uuid::from_u128(bits))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A finished item: the immutable result of applying every applicable rule
/// to a blueprint for a given material assignment.
///
/// Created only by the synthesis engine; owned by the simulation's
/// append-only inventory thereafter. The keys of `materials` are exactly the
/// source blueprint's slot ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizedItem {
    /// Process-unique id.
    pub id: ItemId,
    /// Id of the blueprint this item was crafted from.
    pub blueprint_id: String,
    /// Display name of that blueprint, denormalized for consumers.
    pub blueprint_name: String,
    /// Which material filled each slot, keyed by slot id.
    pub materials: BTreeMap<String, String>,
    /// Final stats after all rules.
    pub final_stats: StatBlock,
    /// Final visual layers after all rules, in base-layer order.
    pub visual_layers: Vec<SpriteLayer>,
}
