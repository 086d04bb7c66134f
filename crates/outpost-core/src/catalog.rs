//! The validated, immutable reference catalog.

use std::collections::HashMap;

use serde::Deserialize;

use crate::blueprint::Blueprint;
use crate::error::{CatalogError, CatalogResult};
use crate::material::Material;

/// The immutable reference lists of materials and blueprints, loaded once at
/// startup.
///
/// Construction validates the data (unique ids, unique slot ids per
/// blueprint, no empty ids), so downstream components never re-check
/// well-formedness during a tick. Lists keep their load order; id lookups go
/// through prebuilt indexes.
#[derive(Debug, Clone)]
pub struct Catalog {
    materials: Vec<Material>,
    blueprints: Vec<Blueprint>,
    material_index: HashMap<String, usize>,
    blueprint_index: HashMap<String, usize>,
}

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDoc {
    materials: Vec<Material>,
    blueprints: Vec<Blueprint>,
}

impl Catalog {
    /// Build a catalog from ordered material and blueprint lists.
    pub fn new(materials: Vec<Material>, blueprints: Vec<Blueprint>) -> CatalogResult<Self> {
        let mut material_index = HashMap::new();
        for (i, mat) in materials.iter().enumerate() {
            if mat.id.is_empty() {
                return Err(CatalogError::EmptyId(format!("material \"{}\"", mat.name)));
            }
            if material_index.insert(mat.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateMaterial(mat.id.clone()));
            }
        }

        let mut blueprint_index = HashMap::new();
        for (i, bp) in blueprints.iter().enumerate() {
            if bp.id.is_empty() {
                return Err(CatalogError::EmptyId(format!("blueprint \"{}\"", bp.name)));
            }
            if blueprint_index.insert(bp.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateBlueprint(bp.id.clone()));
            }
            let mut seen = HashMap::new();
            for slot in &bp.slots {
                if slot.id.is_empty() {
                    return Err(CatalogError::EmptyId(format!(
                        "slot \"{}\" of blueprint \"{}\"",
                        slot.name, bp.id
                    )));
                }
                if seen.insert(slot.id.as_str(), ()).is_some() {
                    return Err(CatalogError::DuplicateSlot {
                        blueprint: bp.id.clone(),
                        slot: slot.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            materials,
            blueprints,
            material_index,
            blueprint_index,
        })
    }

    /// Parse and validate a catalog from a JSON document of the form
    /// `{ "materials": [...], "blueprints": [...] }`.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let doc: CatalogDoc = serde_json::from_str(json)?;
        Self::new(doc.materials, doc.blueprints)
    }

    /// All materials in load order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// All blueprints in load order.
    pub fn blueprints(&self) -> &[Blueprint] {
        &self.blueprints
    }

    /// Look up a material by id.
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.material_index.get(id).map(|&i| &self.materials[i])
    }

    /// Look up a blueprint by id.
    pub fn blueprint(&self, id: &str) -> Option<&Blueprint> {
        self.blueprint_index.get(id).map(|&i| &self.blueprints[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::BlueprintSlot;
    use crate::stats::StatBlock;

    fn material(id: &str) -> Material {
        Material {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    fn blueprint(id: &str, slot_ids: &[&str]) -> Blueprint {
        Blueprint {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            slots: slot_ids
                .iter()
                .map(|s| BlueprintSlot {
                    id: (*s).into(),
                    name: (*s).into(),
                    allowed_tags: Vec::new(),
                })
                .collect(),
            base_stats: StatBlock::new(),
            base_layers: Vec::new(),
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(
            vec![material("mat_a"), material("mat_b")],
            vec![blueprint("bp_x", &["slot_1"])],
        )
        .unwrap();
        assert_eq!(catalog.material("mat_b").unwrap().id, "mat_b");
        assert_eq!(catalog.blueprint("bp_x").unwrap().id, "bp_x");
        assert!(catalog.material("mat_c").is_none());
    }

    #[test]
    fn duplicate_material_rejected() {
        let err = Catalog::new(vec![material("mat_a"), material("mat_a")], Vec::new());
        assert!(matches!(err, Err(CatalogError::DuplicateMaterial(id)) if id == "mat_a"));
    }

    #[test]
    fn duplicate_slot_rejected() {
        let err = Catalog::new(Vec::new(), vec![blueprint("bp_x", &["slot_1", "slot_1"])]);
        assert!(matches!(
            err,
            Err(CatalogError::DuplicateSlot { blueprint, slot })
                if blueprint == "bp_x" && slot == "slot_1"
        ));
    }

    #[test]
    fn empty_id_rejected() {
        let err = Catalog::new(vec![material("")], Vec::new());
        assert!(matches!(err, Err(CatalogError::EmptyId(_))));
    }

    #[test]
    fn from_json_parses_and_validates() {
        let catalog = Catalog::from_json(
            r#"{
                "materials": [
                    { "id": "mat_a", "name": "A", "description": "", "tags": ["Metal"] }
                ],
                "blueprints": [
                    {
                        "id": "bp_x", "name": "X", "description": "",
                        "slots": [{ "id": "slot_1", "name": "One", "allowed_tags": [] }],
                        "base_stats": { "damage": 10 },
                        "base_layers": [
                            { "id": "body", "sprite_id": "x_body", "color": 5592405 }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.materials().len(), 1);
        let bp = catalog.blueprint("bp_x").unwrap();
        assert_eq!(bp.base_stats.number("damage"), Some(10.0));
        assert!(!bp.base_layers[0].emissive);
    }

    #[test]
    fn from_json_bad_document_is_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ nope"),
            Err(CatalogError::Parse(_))
        ));
    }
}
