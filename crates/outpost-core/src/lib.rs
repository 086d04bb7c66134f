//! Core types for Outpost: the data model of the colony-simulation prototype.
//!
//! This crate defines the immutable reference data (materials, blueprints),
//! the stat model, crafted items, pawns, and dilemmas. It knows nothing about
//! crafting rules or the tick loop — those live in `outpost-forge` and
//! `outpost-sim`. A [`Catalog`] can be constructed programmatically or
//! deserialized from JSON; either way it is validated once at load time and
//! treated as immutable afterward.

/// Blueprint templates, slots, and sprite layers.
pub mod blueprint;
/// The validated, immutable reference catalog of materials and blueprints.
pub mod catalog;
/// Bundled starter content: the standard catalog and starting crew.
pub mod content;
/// Narrative dilemmas and their choices.
pub mod dilemma;
/// Error types used throughout the crate.
pub mod error;
/// Crafted item types and identifiers.
pub mod item;
/// Raw crafting materials with descriptive tags.
pub mod material;
/// Pawns: simulated colonists with status, vitals, and position.
pub mod pawn;
/// Stat values and the ordered stat block.
pub mod stats;

/// Re-export blueprint types.
pub use blueprint::{Blueprint, BlueprintSlot, SpriteLayer};
/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export dilemma types.
pub use dilemma::{Dilemma, DilemmaChoice, DilemmaId};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export item types.
pub use item::{ItemId, SynthesizedItem};
/// Re-export the material type.
pub use material::Material;
/// Re-export pawn types.
pub use pawn::{Pawn, PawnId, PawnStatus, Position, Vitals};
/// Re-export stat types.
pub use stats::{StatBlock, StatValue};
