//! Data models for gloomlog
//!
//! Core abstractions:
//! - Encounter: one thing that happened in the campaign, plus what it unlocked
//! - Campaign: the ordered encounter log that makes up a save document
//! - `GridLocation`: where a scenario sits on the map

pub mod campaign;
pub mod encounter;
pub mod grid;

use thiserror::Error;

pub use campaign::Campaign;
pub use encounter::{Choice, Encounter, EncounterKind, EncounterType, IdentifierScheme, Outcome};
pub use grid::GridLocation;

/// Errors raised while building or decoding campaign data
#[derive(Debug, Error)]
pub enum ModelError {
    /// Grid coordinates outside the map
    #[error("invalid grid location: column {column:?}, row {row} (expected A-O, 1-18)")]
    InvalidGridLocation {
        /// Column letter given
        column: char,
        /// Row number given
        row: u8,
    },

    /// The save document is not a valid campaign
    #[error("invalid save document: {0}")]
    Decode(#[source] serde_json::Error),

    /// The campaign could not be serialized
    #[error("failed to encode campaign: {0}")]
    Encode(#[source] serde_json::Error),
}
