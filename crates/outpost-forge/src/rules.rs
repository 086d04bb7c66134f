//! Ordered, data-driven rule tables for material effects.

use serde::{Deserialize, Serialize};

use outpost_core::{Blueprint, BlueprintSlot, Material, SpriteLayer, StatBlock};

/// A deterministic transformation of one stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatEffect {
    /// Add `amount` to a stat, seeding a missing stat from `default` first.
    Add {
        /// Stat name.
        stat: String,
        /// Delta to add (may be negative).
        amount: f64,
        /// Value assumed when the stat is absent.
        default: f64,
    },
    /// Multiply a stat by `factor`. Absent or text stats are left alone.
    Scale {
        /// Stat name.
        stat: String,
        /// Multiplier.
        factor: f64,
    },
    /// Set a stat to a fixed number, creating it if absent.
    SetNumber {
        /// Stat name.
        stat: String,
        /// New value.
        value: f64,
    },
    /// Set a stat to fixed text, creating it if absent.
    SetText {
        /// Stat name.
        stat: String,
        /// New value.
        value: String,
    },
    /// Set a stat to fixed text only when the stat already exists.
    SetTextIfPresent {
        /// Stat name.
        stat: String,
        /// New value.
        value: String,
    },
}

impl StatEffect {
    /// Apply this effect to a stat block.
    pub fn apply(&self, stats: &mut StatBlock) {
        match self {
            Self::Add {
                stat,
                amount,
                default,
            } => stats.add(stat, *amount, *default),
            Self::Scale { stat, factor } => stats.scale(stat, *factor),
            Self::SetNumber { stat, value } => stats.set(stat.clone(), *value),
            Self::SetText { stat, value } => stats.set(stat.clone(), value.as_str()),
            Self::SetTextIfPresent { stat, value } => {
                if stats.contains(stat) {
                    stats.set(stat.clone(), value.as_str());
                }
            }
        }
    }
}

/// A deterministic transformation of the visual layer stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerEffect {
    /// Retint a named layer. No-op when the layer is absent.
    Recolor {
        /// Layer id, e.g. `body`.
        layer: String,
        /// New 24-bit RGB tint.
        color: u32,
    },
    /// Make a named layer glow. No-op when the layer is absent.
    MarkEmissive {
        /// Layer id.
        layer: String,
    },
    /// Make the first (primary) layer glow, whatever its id.
    MarkPrimaryEmissive,
}

impl LayerEffect {
    /// Apply this effect to a layer stack.
    pub fn apply(&self, layers: &mut [SpriteLayer]) {
        match self {
            Self::Recolor { layer, color } => {
                if let Some(l) = layers.iter_mut().find(|l| &l.id == layer) {
                    l.color = *color;
                }
            }
            Self::MarkEmissive { layer } => {
                if let Some(l) = layers.iter_mut().find(|l| &l.id == layer) {
                    l.emissive = true;
                }
            }
            Self::MarkPrimaryEmissive => {
                if let Some(l) = layers.first_mut() {
                    l.emissive = true;
                }
            }
        }
    }
}

/// A generic rule: fires once per slot whenever the applied material carries
/// `tag`, independent of blueprint and slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRule {
    /// The material tag this rule keys on.
    pub tag: String,
    /// Stat effects, applied in order.
    pub stats: Vec<StatEffect>,
    /// Layer effects, applied in order.
    pub layers: Vec<LayerEffect>,
}

/// A specific rule keyed by the exact (blueprint, slot, material) triple.
///
/// This table is the content extension point: new combinations are new rows,
/// and the generic rules never change for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificRule {
    /// Blueprint id to match.
    pub blueprint_id: String,
    /// Slot id to match.
    pub slot_id: String,
    /// Material id to match.
    pub material_id: String,
    /// Stat effects, applied in order.
    pub stats: Vec<StatEffect>,
    /// Layer effects, applied in order.
    pub layers: Vec<LayerEffect>,
}

impl SpecificRule {
    fn matches(&self, blueprint: &Blueprint, slot: &BlueprintSlot, material: &Material) -> bool {
        self.blueprint_id == blueprint.id
            && self.slot_id == slot.id
            && self.material_id == material.id
    }
}

/// The two-tier rule table driving all material effects.
///
/// [`RuleLibrary::apply`] is a pure function over its accumulators: no state
/// of its own, no side effects beyond the two `&mut` arguments, and fully
/// deterministic for a fixed input quadruple. Ordering is load-bearing —
/// tag rules run in table order, then specific rules in table order, and the
/// engine walks slots in blueprint declaration order. Some effects multiply
/// rather than add, so reordering changes results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleLibrary {
    /// Tier 1: generic tag rules.
    pub tag_rules: Vec<TagRule>,
    /// Tier 2: specific triple-keyed rules.
    pub specific_rules: Vec<SpecificRule>,
}

impl RuleLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generic tag rule.
    pub fn push_tag_rule(&mut self, rule: TagRule) {
        self.tag_rules.push(rule);
    }

    /// Append a specific triple-keyed rule.
    pub fn push_specific_rule(&mut self, rule: SpecificRule) {
        self.specific_rules.push(rule);
    }

    /// Apply every matching rule for one slot/material pair to the stat and
    /// layer accumulators, tag rules first, then specific rules.
    pub fn apply(
        &self,
        stats: &mut StatBlock,
        layers: &mut [SpriteLayer],
        blueprint: &Blueprint,
        slot: &BlueprintSlot,
        material: &Material,
    ) {
        for rule in &self.tag_rules {
            if material.has_tag(&rule.tag) {
                for effect in &rule.stats {
                    effect.apply(stats);
                }
                for effect in &rule.layers {
                    effect.apply(layers);
                }
            }
        }

        for rule in &self.specific_rules {
            if rule.matches(blueprint, slot, material) {
                for effect in &rule.stats {
                    effect.apply(stats);
                }
                for effect in &rule.layers {
                    effect.apply(layers);
                }
            }
        }
    }
}
