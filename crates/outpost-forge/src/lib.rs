//! Rule-based item synthesis for Outpost.
//!
//! A [`RuleLibrary`] is a pair of ordered, data-driven rule tables: generic
//! rules keyed by material tag, and specific rules keyed by the exact
//! (blueprint, slot, material) triple. The [`SynthesisEngine`] validates a
//! slot-to-material assignment against a catalog, then folds the rules over
//! fresh copies of a blueprint's base stats and layers to produce an
//! immutable [`outpost_core::SynthesizedItem`]. Adding content means adding
//! table rows, never code.

/// The synthesis engine: validation and rule orchestration.
pub mod engine;
/// Error types for crafting.
pub mod error;
/// The standard rule tables shipped with the starter content.
pub mod preset;
/// Rule tables and their stat/layer effects.
pub mod rules;

/// Re-export the engine.
pub use engine::SynthesisEngine;
/// Re-export error types.
pub use error::{CraftError, CraftResult};
/// Re-export rule types.
pub use rules::{LayerEffect, RuleLibrary, SpecificRule, StatEffect, TagRule};
