//! Map grid locations
//!
//! Scenarios sit on a grid of lettered columns `A`-`O` and numbered rows
//! `1`-`18` on the campaign map.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ModelError;

/// First column letter on the map
pub const FIRST_COLUMN: char = 'A';
/// Last column letter on the map
pub const LAST_COLUMN: char = 'O';
/// Highest row number on the map
pub const LAST_ROW: u8 = 18;

/// A cell on the campaign map, e.g. `(G-4)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGridLocation", into = "RawGridLocation")]
pub struct GridLocation {
    column: char,
    row: u8,
}

/// Wire shape, validated on the way in
#[derive(Serialize, Deserialize)]
struct RawGridLocation {
    character: char,
    number: u8,
}

impl GridLocation {
    /// Create a validated location
    pub fn new(column: char, row: u8) -> Result<Self, ModelError> {
        if !(FIRST_COLUMN..=LAST_COLUMN).contains(&column) || !(1..=LAST_ROW).contains(&row) {
            return Err(ModelError::InvalidGridLocation { column, row });
        }
        Ok(Self { column, row })
    }

    /// Column letter
    #[must_use]
    pub const fn column(&self) -> char {
        self.column
    }

    /// Row number
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// All column letters, in order
    pub fn columns() -> impl Iterator<Item = char> {
        FIRST_COLUMN..=LAST_COLUMN
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{})", self.column, self.row)
    }
}

impl TryFrom<RawGridLocation> for GridLocation {
    type Error = ModelError;

    fn try_from(raw: RawGridLocation) -> Result<Self, Self::Error> {
        Self::new(raw.character, raw.number)
    }
}

impl From<GridLocation> for RawGridLocation {
    fn from(location: GridLocation) -> Self {
        Self {
            character: location.column,
            number: location.row,
        }
    }
}
