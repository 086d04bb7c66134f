//! Error types for catalog construction and loading.

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building or loading a [`crate::Catalog`].
///
/// All malformed reference data is rejected here, at load time. Components
/// downstream (the synthesis engine, the simulation) may therefore treat
/// catalog contents as well-formed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two materials share the same id.
    #[error("duplicate material id: \"{0}\"")]
    DuplicateMaterial(String),

    /// Two blueprints share the same id.
    #[error("duplicate blueprint id: \"{0}\"")]
    DuplicateBlueprint(String),

    /// Two slots within one blueprint share the same id.
    #[error("duplicate slot id \"{slot}\" in blueprint \"{blueprint}\"")]
    DuplicateSlot {
        /// The blueprint containing the clash.
        blueprint: String,
        /// The repeated slot id.
        slot: String,
    },

    /// A material, blueprint, or slot has an empty id.
    #[error("empty id on {0}")]
    EmptyId(String),

    /// The catalog JSON document could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
