//! Raw crafting materials.

use serde::{Deserialize, Serialize};

/// A raw material that can fill a blueprint slot.
///
/// Materials carry no behavior of their own; their `tags` drive generic rule
/// matching in the synthesis layer. Catalog-owned and immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Stable content id, e.g. `mat_titanium`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Descriptive tags used for rule matching, e.g. `Metal`, `Durable`.
    pub tags: Vec<String>,
}

impl Material {
    /// True if the material carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_tag_is_exact_match() {
        let mat = Material {
            id: "mat_titanium".into(),
            name: "Titanium".into(),
            description: "A light and strong metal.".into(),
            tags: vec!["Metal".into(), "Durable".into(), "Lightweight".into()],
        };
        assert!(mat.has_tag("Durable"));
        assert!(!mat.has_tag("durable"));
        assert!(!mat.has_tag("Crystal"));
    }
}
