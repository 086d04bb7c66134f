//! Narrative dilemmas: decision points that pause the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a presented dilemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DilemmaId(pub Uuid);

impl DilemmaId {
    /// Generate a fresh random dilemma id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build an id from raw bits, used by the narrative trigger to mint ids
    /// from a seeded RNG so whole runs stay reproducible.
    pub fn from_bits(bits: u128) -> Self {
        Self(Uuid::from_u128(bits))
    }
}

impl Default for DilemmaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DilemmaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// One option the player can pick when resolving a dilemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DilemmaChoice {
    /// Text shown to the player, e.g. "Tap the vent carefully."
    pub text: String,
    /// Key handed to a future consequence system on resolution.
    pub consequence_key: String,
}

/// A narrative decision point. Ephemeral: created by the narrative trigger,
/// held as the simulation's single active dilemma, dropped on resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dilemma {
    /// Unique id of this presentation.
    pub id: DilemmaId,
    /// Headline, e.g. "Power Surge".
    pub title: String,
    /// Narrative body text.
    pub description: String,
    /// Choices in presentation order. Never empty.
    pub choices: Vec<DilemmaChoice>,
}

impl Dilemma {
    /// Look up a choice by index.
    pub fn choice(&self, index: usize) -> Option<&DilemmaChoice> {
        self.choices.get(index)
    }
}
