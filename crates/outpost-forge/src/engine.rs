//! The synthesis engine: validation and rule orchestration.

use std::collections::BTreeMap;

use rand::Rng;
use rand::rngs::StdRng;

use outpost_core::{Blueprint, Catalog, ItemId, Material, SynthesizedItem};

use crate::error::{CraftError, CraftResult};
use crate::preset;
use crate::rules::RuleLibrary;

/// Combines a blueprint with a slot-to-material assignment under a rule
/// library to produce a finished item.
///
/// The engine is stateless apart from its rule tables. It validates fully
/// before mutating anything (all-or-nothing) and never writes to any
/// inventory — storing the result is the caller's job.
#[derive(Debug, Clone)]
pub struct SynthesisEngine {
    rules: RuleLibrary,
}

impl SynthesisEngine {
    /// Create an engine over the given rule library.
    pub fn new(rules: RuleLibrary) -> Self {
        Self { rules }
    }

    /// Create an engine over the standard ruleset.
    pub fn standard() -> Self {
        Self::new(preset::standard_rules())
    }

    /// The rule tables this engine applies.
    pub fn rules(&self) -> &RuleLibrary {
        &self.rules
    }

    /// Craft one item.
    ///
    /// `assignment` maps slot id to material id and must cover every slot of
    /// `blueprint`; assigned materials must resolve in `catalog`. Validation
    /// runs entirely up front, so on error nothing has been computed and the
    /// caller's state is untouched. Slot tags are deliberately not checked
    /// (`allowed_tags` is UI guidance only).
    ///
    /// The item id is minted from `rng`, so a seeded run produces a
    /// reproducible id stream. Stats and layers are deep copies of the
    /// blueprint's base data — the catalog is never aliased or mutated.
    pub fn synthesize(
        &self,
        blueprint: &Blueprint,
        assignment: &BTreeMap<String, String>,
        catalog: &Catalog,
        rng: &mut StdRng,
    ) -> CraftResult<SynthesizedItem> {
        // Validate every slot before touching any accumulator.
        let mut filled: Vec<(&str, &Material)> = Vec::with_capacity(blueprint.slots.len());
        for slot in &blueprint.slots {
            let material_id = assignment
                .get(&slot.id)
                .ok_or_else(|| CraftError::IncompleteAssignment(slot.id.clone()))?;
            let material = catalog
                .material(material_id)
                .ok_or_else(|| CraftError::UnknownMaterial(material_id.clone()))?;
            filled.push((slot.id.as_str(), material));
        }

        let mut final_stats = blueprint.base_stats.clone();
        let mut visual_layers = blueprint.base_layers.clone();

        // Slots in declaration order; tag rules then specific rules per slot.
        for (slot, (_, material)) in blueprint.slots.iter().zip(&filled) {
            self.rules
                .apply(&mut final_stats, &mut visual_layers, blueprint, slot, material);
        }

        // Rebuilt from the blueprint's own slots, so the keys are exactly
        // the slot ids even if the caller passed extra entries.
        let materials: BTreeMap<String, String> = filled
            .iter()
            .map(|(slot_id, material)| ((*slot_id).to_string(), material.id.clone()))
            .collect();

        Ok(SynthesizedItem {
            id: ItemId::from_bits(rng.random()),
            blueprint_id: blueprint.id.clone(),
            blueprint_name: blueprint.name.clone(),
            materials,
            final_stats,
            visual_layers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outpost_core::content::{standard_catalog, standard_materials};
    use outpost_core::BlueprintSlot;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn assign(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(s, m)| ((*s).to_string(), (*m).to_string()))
            .collect()
    }

    #[test]
    fn complete_assignment_succeeds_and_records_materials() {
        let catalog = standard_catalog();
        let engine = SynthesisEngine::standard();
        let assignment = assign(&[("slot_body", "mat_titanium"), ("slot_core", "mat_crystal")]);

        let item = engine
            .synthesize(
                catalog.blueprint("bp_rifle").unwrap(),
                &assignment,
                &catalog,
                &mut rng(),
            )
            .unwrap();

        assert_eq!(item.blueprint_id, "bp_rifle");
        assert_eq!(item.blueprint_name, "Assault Rifle");
        assert_eq!(item.materials, assignment);
    }

    #[test]
    fn missing_slot_is_reported_in_declaration_order() {
        let catalog = standard_catalog();
        let engine = SynthesisEngine::standard();
        let assignment = assign(&[("slot_body", "mat_titanium")]);

        let err = engine
            .synthesize(
                catalog.blueprint("bp_rifle").unwrap(),
                &assignment,
                &catalog,
                &mut rng(),
            )
            .unwrap_err();
        assert_eq!(err, CraftError::IncompleteAssignment("slot_core".into()));
    }

    #[test]
    fn unknown_material_is_rejected() {
        let catalog = standard_catalog();
        let engine = SynthesisEngine::standard();
        let assignment = assign(&[("slot_body", "mat_unobtanium"), ("slot_core", "mat_crystal")]);

        let err = engine
            .synthesize(
                catalog.blueprint("bp_rifle").unwrap(),
                &assignment,
                &catalog,
                &mut rng(),
            )
            .unwrap_err();
        assert_eq!(err, CraftError::UnknownMaterial("mat_unobtanium".into()));
    }

    #[test]
    fn extra_assignment_keys_do_not_leak_into_item() {
        let catalog = standard_catalog();
        let engine = SynthesisEngine::standard();
        let assignment = assign(&[
            ("slot_body", "mat_titanium"),
            ("slot_core", "mat_crystal"),
            ("slot_bogus", "mat_chitin"),
        ]);

        let item = engine
            .synthesize(
                catalog.blueprint("bp_rifle").unwrap(),
                &assignment,
                &catalog,
                &mut rng(),
            )
            .unwrap();
        let keys: Vec<&str> = item.materials.keys().map(String::as_str).collect();
        assert_eq!(keys, ["slot_body", "slot_core"]);
    }

    /// The canonical multiplicative-order scenario: a rifle whose materials
    /// carry no generic tags, isolating the specific rules.
    #[test]
    fn rifle_specific_rules_compose_in_slot_order() {
        let materials = vec![
            Material {
                id: "mat_titanium".into(),
                name: "Titanium".into(),
                description: String::new(),
                tags: vec!["Metal".into()],
            },
            Material {
                id: "mat_crystal".into(),
                name: "Phase Crystal".into(),
                description: String::new(),
                tags: vec!["Crystal".into()],
            },
        ];
        let rifle = Blueprint {
            id: "bp_rifle".into(),
            name: "Assault Rifle".into(),
            description: String::new(),
            slots: vec![
                BlueprintSlot {
                    id: "slot_body".into(),
                    name: "Receiver".into(),
                    allowed_tags: Vec::new(),
                },
                BlueprintSlot {
                    id: "slot_core".into(),
                    name: "Power Core".into(),
                    allowed_tags: Vec::new(),
                },
            ],
            base_stats: [("damage", 10.0), ("fire_rate", 5.0), ("weight", 10.0)]
                .into_iter()
                .collect(),
            base_layers: Vec::new(),
        };
        let catalog = Catalog::new(materials, vec![rifle]).unwrap();
        let engine = SynthesisEngine::standard();
        let assignment = assign(&[("slot_body", "mat_titanium"), ("slot_core", "mat_crystal")]);

        let item = engine
            .synthesize(
                catalog.blueprint("bp_rifle").unwrap(),
                &assignment,
                &catalog,
                &mut rng(),
            )
            .unwrap();

        let stats = &item.final_stats;
        // fire_rate: 5 * 1.2 (titanium body) * 0.8 (crystal core) = 4.8
        assert!((stats.number("fire_rate").unwrap() - 4.8).abs() < 1e-9);
        // damage: 10 * 1.5 (crystal core) = 15
        assert!((stats.number("damage").unwrap() - 15.0).abs() < 1e-9);
        // weight: 10 - 2 (titanium body) = 8
        assert!((stats.number("weight").unwrap() - 8.0).abs() < 1e-9);
        assert_eq!(stats.text("damage_type"), Some("Plasma"));
    }

    /// Same assignment against the full starter content, where titanium and
    /// crystal also carry generic tags.
    #[test]
    fn rifle_with_standard_content_stacks_generic_and_specific_rules() {
        let catalog = standard_catalog();
        let engine = SynthesisEngine::standard();
        let assignment = assign(&[("slot_body", "mat_titanium"), ("slot_core", "mat_crystal")]);

        let item = engine
            .synthesize(
                catalog.blueprint("bp_rifle").unwrap(),
                &assignment,
                &catalog,
                &mut rng(),
            )
            .unwrap();

        let stats = &item.final_stats;
        // weight: 10 +5 (Durable) -5 (Lightweight) -2 (titanium body) = 8
        assert!((stats.number("weight").unwrap() - 8.0).abs() < 1e-9);
        // damage: (10 +5 Energy_Focus) * 1.5 = 22.5
        assert!((stats.number("damage").unwrap() - 22.5).abs() < 1e-9);
        // fire_rate: 5 * 1.2 * 0.8 = 4.8
        assert!((stats.number("fire_rate").unwrap() - 4.8).abs() < 1e-9);
        assert_eq!(stats.number("energy_capacity"), Some(50.0));
        assert_eq!(stats.number("durability"), Some(120.0));
        assert_eq!(stats.text("damage_type"), Some("Plasma"));

        let barrel = item.visual_layers.iter().find(|l| l.id == "barrel").unwrap();
        assert_eq!(barrel.color, 0x00FFFF);
        assert!(barrel.emissive);
        let body = item.visual_layers.iter().find(|l| l.id == "body").unwrap();
        assert_eq!(body.color, 0x888888);
    }

    #[test]
    fn bioluminescent_plating_makes_vest_glow() {
        let catalog = standard_catalog();
        let engine = SynthesisEngine::standard();
        let assignment = assign(&[("slot_plating", "mat_bioloom"), ("slot_core", "mat_crystal")]);

        let item = engine
            .synthesize(
                catalog.blueprint("bp_armor").unwrap(),
                &assignment,
                &catalog,
                &mut rng(),
            )
            .unwrap();
        assert!(item.visual_layers[0].emissive);
        assert_eq!(item.final_stats.number("energy_shield"), Some(50.0));
        // defense: 20 +5 (crystal core) = 25; chitin was not used
        assert_eq!(item.final_stats.number("defense"), Some(25.0));
    }

    #[test]
    fn repeated_synthesis_is_deterministic_modulo_id() {
        let catalog = standard_catalog();
        let engine = SynthesisEngine::standard();
        let assignment = assign(&[("slot_body", "mat_ironwood"), ("slot_core", "mat_crystal")]);
        let blueprint = catalog.blueprint("bp_rifle").unwrap();

        let a = engine
            .synthesize(blueprint, &assignment, &catalog, &mut rng())
            .unwrap();
        let b = engine
            .synthesize(
                blueprint,
                &assignment,
                &catalog,
                &mut StdRng::seed_from_u64(7),
            )
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.final_stats, b.final_stats);
        assert_eq!(a.visual_layers, b.visual_layers);
        assert_eq!(a.materials, b.materials);
    }

    #[test]
    fn catalog_base_data_is_never_mutated() {
        let catalog = standard_catalog();
        let engine = SynthesisEngine::standard();
        let before = catalog.blueprint("bp_rifle").unwrap().clone();
        let assignment = assign(&[("slot_body", "mat_titanium"), ("slot_core", "mat_crystal")]);

        engine
            .synthesize(
                catalog.blueprint("bp_rifle").unwrap(),
                &assignment,
                &catalog,
                &mut rng(),
            )
            .unwrap();
        assert_eq!(catalog.blueprint("bp_rifle").unwrap(), &before);
    }

    proptest! {
        /// Any assignment drawn from the catalog covers the rifle's slots and
        /// synthesizes successfully, with the exact-keys invariant holding.
        #[test]
        fn any_catalog_assignment_synthesizes(body in 0usize..5, core in 0usize..5, seed: u64) {
            let catalog = standard_catalog();
            let engine = SynthesisEngine::standard();
            let mats = standard_materials();
            let assignment = assign(&[
                ("slot_body", mats[body].id.as_str()),
                ("slot_core", mats[core].id.as_str()),
            ]);

            let item = engine
                .synthesize(
                    catalog.blueprint("bp_rifle").unwrap(),
                    &assignment,
                    &catalog,
                    &mut StdRng::seed_from_u64(seed),
                )
                .unwrap();
            prop_assert_eq!(&item.materials, &assignment);
            let again = engine
                .synthesize(
                    catalog.blueprint("bp_rifle").unwrap(),
                    &assignment,
                    &catalog,
                    &mut StdRng::seed_from_u64(seed),
                )
                .unwrap();
            prop_assert_eq!(item.final_stats, again.final_stats);
        }
    }
}
