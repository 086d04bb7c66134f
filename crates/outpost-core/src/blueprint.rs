//! Blueprints: templates for craftable items.

use serde::{Deserialize, Serialize};

use crate::material::Material;
use crate::stats::StatBlock;

/// A single visual layer of an item: one sprite with tint and glow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteLayer {
    /// Layer id within the item, e.g. `body`, `barrel`.
    pub id: String,
    /// Reference to a sprite asset, resolved by the (external) renderer.
    pub sprite_id: String,
    /// 24-bit RGB tint, e.g. `0x00FFFF`.
    pub color: u32,
    /// Whether the layer glows.
    #[serde(default)]
    pub emissive: bool,
}

/// A named position within a blueprint to be filled with one material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintSlot {
    /// Slot id, unique within its blueprint, e.g. `slot_body`.
    pub id: String,
    /// Display name, e.g. `Receiver`.
    pub name: String,
    /// Material tags this slot is meant for. Guidance for pickers and
    /// validation hints only — the synthesis engine does not enforce it.
    pub allowed_tags: Vec<String>,
}

impl BlueprintSlot {
    /// True if the material carries at least one allowed tag. An empty
    /// `allowed_tags` list accepts anything.
    pub fn accepts(&self, material: &Material) -> bool {
        self.allowed_tags.is_empty() || self.allowed_tags.iter().any(|t| material.has_tag(t))
    }
}

/// The template for a craftable item class: slots to fill, base stats, and
/// base visual layers. Catalog-owned and immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Stable content id, e.g. `bp_rifle`.
    pub id: String,
    /// Display name, e.g. `Assault Rifle`.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Slots in declaration order. Rule application follows this order.
    pub slots: Vec<BlueprintSlot>,
    /// Stats before any material rules are applied.
    pub base_stats: StatBlock,
    /// Visual layers before any material rules are applied.
    pub base_layers: Vec<SpriteLayer>,
}

impl Blueprint {
    /// Look up a slot by id.
    pub fn slot(&self, slot_id: &str) -> Option<&BlueprintSlot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }
}
