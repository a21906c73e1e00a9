//! Save names
//!
//! A save name is chosen by the player when starting a campaign and becomes
//! part of every file name in the save directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StoreError;

/// A validated, lower-case save name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SaveName(String);

impl SaveName {
    /// Normalize and validate a user-supplied name.
    ///
    /// Names are trimmed and lower-cased. Empty names, names starting with a
    /// dot and names containing path separators or control characters are
    /// rejected.
    pub fn new(raw: &str) -> Result<Self, StoreError> {
        let name = raw.trim().to_lowercase();

        let invalid = name.is_empty()
            || name.starts_with('.')
            || name.chars().any(|c| c == '/' || c == '\\' || c.is_control());

        if invalid {
            return Err(StoreError::InvalidName(raw.to_string()));
        }

        Ok(Self(name))
    }

    /// The name as stored on disk
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SaveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SaveName {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SaveName {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<SaveName> for String {
    fn from(name: SaveName) -> Self {
        name.0
    }
}

impl AsRef<str> for SaveName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
