//! The standard rule tables shipped with the starter content.
//!
//! These produce the same [`RuleLibrary`] a data pack would, but without
//! requiring any files on disk. New material/blueprint combinations belong
//! here (or in an embedder's own tables), never in engine code.

use crate::rules::{LayerEffect, RuleLibrary, SpecificRule, StatEffect, TagRule};

/// The standard two-tier ruleset.
///
/// Tier 1 reads material tags: `Durable` toughens and weighs down,
/// `Lightweight` sheds weight, `Energy_Focus` adds energy capacity and
/// damage, `Bioluminescent` makes the primary layer glow. Tier 2 covers the
/// named rifle and armor combinations from the starter content.
pub fn standard_rules() -> RuleLibrary {
    RuleLibrary {
        tag_rules: vec![
            TagRule {
                tag: "Durable".into(),
                stats: vec![
                    StatEffect::Add {
                        stat: "durability".into(),
                        amount: 20.0,
                        default: 100.0,
                    },
                    StatEffect::Add {
                        stat: "weight".into(),
                        amount: 5.0,
                        default: 0.0,
                    },
                ],
                layers: Vec::new(),
            },
            TagRule {
                tag: "Lightweight".into(),
                stats: vec![StatEffect::Add {
                    stat: "weight".into(),
                    amount: -5.0,
                    default: 10.0,
                }],
                layers: Vec::new(),
            },
            TagRule {
                tag: "Energy_Focus".into(),
                stats: vec![
                    StatEffect::Add {
                        stat: "energy_capacity".into(),
                        amount: 50.0,
                        default: 0.0,
                    },
                    StatEffect::Add {
                        stat: "damage".into(),
                        amount: 5.0,
                        default: 0.0,
                    },
                    StatEffect::SetTextIfPresent {
                        stat: "damage_type".into(),
                        value: "Energy".into(),
                    },
                ],
                layers: Vec::new(),
            },
            TagRule {
                tag: "Bioluminescent".into(),
                stats: Vec::new(),
                layers: vec![LayerEffect::MarkPrimaryEmissive],
            },
        ],
        specific_rules: vec![
            // Rifle receiver
            SpecificRule {
                blueprint_id: "bp_rifle".into(),
                slot_id: "slot_body".into(),
                material_id: "mat_ironwood".into(),
                stats: vec![
                    StatEffect::Add {
                        stat: "damage".into(),
                        amount: 2.0,
                        default: 10.0,
                    },
                    StatEffect::Add {
                        stat: "weight".into(),
                        amount: 3.0,
                        default: 0.0,
                    },
                ],
                layers: vec![LayerEffect::Recolor {
                    layer: "body".into(),
                    color: 0x6B4226,
                }],
            },
            SpecificRule {
                blueprint_id: "bp_rifle".into(),
                slot_id: "slot_body".into(),
                material_id: "mat_titanium".into(),
                stats: vec![
                    StatEffect::Scale {
                        stat: "fire_rate".into(),
                        factor: 1.2,
                    },
                    StatEffect::Add {
                        stat: "weight".into(),
                        amount: -2.0,
                        default: 0.0,
                    },
                ],
                layers: vec![LayerEffect::Recolor {
                    layer: "body".into(),
                    color: 0x888888,
                }],
            },
            // Rifle power core
            SpecificRule {
                blueprint_id: "bp_rifle".into(),
                slot_id: "slot_core".into(),
                material_id: "mat_crystal".into(),
                stats: vec![
                    StatEffect::SetText {
                        stat: "damage_type".into(),
                        value: "Plasma".into(),
                    },
                    StatEffect::Scale {
                        stat: "damage".into(),
                        factor: 1.5,
                    },
                    StatEffect::Scale {
                        stat: "fire_rate".into(),
                        factor: 0.8,
                    },
                ],
                layers: vec![
                    LayerEffect::Recolor {
                        layer: "barrel".into(),
                        color: 0x00FFFF,
                    },
                    LayerEffect::MarkEmissive {
                        layer: "barrel".into(),
                    },
                ],
            },
            // Armor plating
            SpecificRule {
                blueprint_id: "bp_armor".into(),
                slot_id: "slot_plating".into(),
                material_id: "mat_chitin".into(),
                stats: vec![
                    StatEffect::Scale {
                        stat: "defense".into(),
                        factor: 0.9,
                    },
                    StatEffect::Add {
                        stat: "mobility".into(),
                        amount: 5.0,
                        default: -5.0,
                    },
                ],
                layers: vec![LayerEffect::Recolor {
                    layer: "vest".into(),
                    color: 0x8B4513,
                }],
            },
            // Armor core matrix
            SpecificRule {
                blueprint_id: "bp_armor".into(),
                slot_id: "slot_core".into(),
                material_id: "mat_crystal".into(),
                stats: vec![
                    StatEffect::SetNumber {
                        stat: "energy_shield".into(),
                        value: 50.0,
                    },
                    StatEffect::Add {
                        stat: "defense".into(),
                        amount: 5.0,
                        default: 0.0,
                    },
                ],
                layers: vec![LayerEffect::MarkEmissive {
                    layer: "vest".into(),
                }],
            },
        ],
    }
}
