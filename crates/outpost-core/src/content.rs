//! Bundled starter content.
//!
//! These produce the same catalog a JSON content pack would, but without
//! requiring any files on disk. The CLI and tests use them as the default
//! world; embedders are free to load their own catalogs instead.

use crate::blueprint::{Blueprint, BlueprintSlot, SpriteLayer};
use crate::catalog::Catalog;
use crate::material::Material;
use crate::pawn::{Pawn, PawnStatus};

/// The standard material list: five materials covering every generic tag.
pub fn standard_materials() -> Vec<Material> {
    vec![
        Material {
            id: "mat_ironwood".into(),
            name: "Ironwood".into(),
            description: "A dense, metallic wood.".into(),
            tags: vec!["Wood".into(), "Durable".into(), "Heavy".into()],
        },
        Material {
            id: "mat_titanium".into(),
            name: "Titanium".into(),
            description: "A light and strong metal.".into(),
            tags: vec!["Metal".into(), "Durable".into(), "Lightweight".into()],
        },
        Material {
            id: "mat_crystal".into(),
            name: "Phase Crystal".into(),
            description: "A crystal that hums with energy.".into(),
            tags: vec!["Crystal".into(), "Energy_Focus".into()],
        },
        Material {
            id: "mat_chitin".into(),
            name: "Arachnid Chitin".into(),
            description: "Lightweight but brittle plating.".into(),
            tags: vec!["Biomass".into(), "Lightweight".into()],
        },
        Material {
            id: "mat_bioloom".into(),
            name: "Bioluminescent Loom".into(),
            description: "Woven fibers that emit a soft glow.".into(),
            tags: vec!["Biomass".into(), "Bioluminescent".into()],
        },
    ]
}

/// The standard blueprint list: a rifle and a combat vest.
pub fn standard_blueprints() -> Vec<Blueprint> {
    vec![
        Blueprint {
            id: "bp_rifle".into(),
            name: "Assault Rifle".into(),
            description: "A standard-issue kinetic firearm.".into(),
            slots: vec![
                BlueprintSlot {
                    id: "slot_body".into(),
                    name: "Receiver".into(),
                    allowed_tags: vec!["Metal".into(), "Wood".into()],
                },
                BlueprintSlot {
                    id: "slot_core".into(),
                    name: "Power Core".into(),
                    allowed_tags: vec!["Crystal".into(), "Component".into()],
                },
            ],
            base_stats: [
                ("damage", 10.0),
                ("fire_rate", 5.0),
                ("accuracy", 80.0),
                ("weight", 10.0),
                ("durability", 100.0),
            ]
            .into_iter()
            .collect(),
            base_layers: vec![
                SpriteLayer {
                    id: "body".into(),
                    sprite_id: "rifle_body_sprite".into(),
                    color: 0x555555,
                    emissive: false,
                },
                SpriteLayer {
                    id: "barrel".into(),
                    sprite_id: "rifle_barrel_sprite".into(),
                    color: 0x333333,
                    emissive: false,
                },
            ],
        },
        Blueprint {
            id: "bp_armor".into(),
            name: "Combat Vest".into(),
            description: "Protective plating for the torso.".into(),
            slots: vec![
                BlueprintSlot {
                    id: "slot_plating".into(),
                    name: "Plating".into(),
                    allowed_tags: vec!["Metal".into(), "Biomass".into()],
                },
                BlueprintSlot {
                    id: "slot_core".into(),
                    name: "Core Matrix".into(),
                    allowed_tags: vec!["Crystal".into(), "Component".into()],
                },
            ],
            base_stats: [
                ("defense", 20.0),
                ("mobility", -5.0),
                ("weight", 15.0),
                ("durability", 150.0),
            ]
            .into_iter()
            .collect(),
            base_layers: vec![SpriteLayer {
                id: "vest".into(),
                sprite_id: "armor_vest_sprite".into(),
                color: 0x4A4A4A,
                emissive: false,
            }],
        },
    ]
}

/// The standard catalog built from [`standard_materials`] and
/// [`standard_blueprints`].
pub fn standard_catalog() -> Catalog {
    // Bundled content is covered by tests, so this cannot actually fail.
    Catalog::new(standard_materials(), standard_blueprints())
        .unwrap_or_else(|e| unreachable!("bundled catalog is well-formed: {e}"))
}

/// The starting crew: five colonists, enough to arm the narrative trigger's
/// pawn-count conditions.
pub fn starting_crew() -> Vec<Pawn> {
    vec![
        Pawn::new("Jax").with_vitals(100.0, 100.0).with_position(100.0, 150.0),
        Pawn::new("Kael")
            .with_vitals(85.0, 100.0)
            .with_position(250.0, 200.0)
            .with_status(PawnStatus::Working),
        Pawn::new("Mira")
            .with_vitals(60.0, 100.0)
            .with_position(180.0, 90.0)
            .with_status(PawnStatus::Injured),
        Pawn::new("Oren").with_vitals(100.0, 100.0).with_position(40.0, 220.0),
        Pawn::new("Sable")
            .with_vitals(100.0, 100.0)
            .with_position(310.0, 140.0)
            .with_status(PawnStatus::Working),
    ]
}
