//! Error types for crafting.

/// Alias for `Result<T, CraftError>`.
pub type CraftResult<T> = Result<T, CraftError>;

/// Why a craft request was refused.
///
/// All variants are recoverable and returned to the caller before any state
/// changes: a failed craft never touches an inventory and never emits an
/// event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CraftError {
    /// The assignment left a blueprint slot unfilled.
    #[error("no material assigned to slot \"{0}\"")]
    IncompleteAssignment(String),

    /// An assigned material id is not in the catalog.
    #[error("unknown material: \"{0}\"")]
    UnknownMaterial(String),

    /// The requested blueprint id is not in the catalog.
    #[error("unknown blueprint: \"{0}\"")]
    UnknownBlueprint(String),
}
