//! Error types for the simulation crate.

use outpost_forge::CraftError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors returned by simulation actions. All recoverable; the simulation
/// state is unchanged whenever one of these comes back.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SimError {
    /// A craft request was refused by the synthesis engine.
    #[error(transparent)]
    Craft(#[from] CraftError),

    /// The requested time scale was zero or negative.
    #[error("time scale must be positive, got {0}")]
    InvalidTimeScale(f64),

    /// `resolve_dilemma` was called with no dilemma active.
    #[error("no dilemma is currently active")]
    NoActiveDilemma,

    /// The chosen index does not exist on the active dilemma.
    #[error("the active dilemma has no choice {0}")]
    UnknownChoice(usize),
}
