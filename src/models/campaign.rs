//! Campaign document
//!
//! A campaign is the ordered list of everything the party has encountered.
//! It is what gets written to a save file.

use serde::{Deserialize, Serialize};

use super::{Choice, Encounter, EncounterKind, EncounterType, ModelError};

/// The full log of one campaign
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Encounters in the order they happened
    // Key spelling matches save files already on disk.
    #[serde(rename = "EnounterList", default)]
    pub encounters: Vec<Encounter>,
}

impl Campaign {
    /// A fresh campaign, opened by the starting city event
    #[must_use]
    pub fn new() -> Self {
        Self {
            encounters: vec![Encounter::new(EncounterKind::CityEvent {
                identifier: 0,
                choice: Some(Choice::A),
            })],
        }
    }

    /// Decode a save document
    pub fn from_document(document: &str) -> Result<Self, ModelError> {
        serde_json::from_str(document).map_err(ModelError::Decode)
    }

    /// Encode as a save document
    pub fn to_document(&self) -> Result<String, ModelError> {
        serde_json::to_string_pretty(self).map_err(ModelError::Encode)
    }

    /// Append an encounter
    pub fn push(&mut self, encounter: Encounter) {
        self.encounters.push(encounter);
    }

    /// Next number for an incrementally numbered type.
    ///
    /// One more than the most recent encounter of that type, or 1.
    #[must_use]
    pub fn next_identifier(&self, encounter_type: EncounterType) -> u32 {
        self.encounters
            .iter()
            .rev()
            .find(|e| e.encounter_type() == encounter_type)
            .and_then(|e| e.kind.number())
            .map_or(1, |n| n.saturating_add(1))
    }

    /// Display lines: each encounter followed by its unlockables
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for encounter in &self.encounters {
            lines.push(encounter.to_string());
            for unlockable in &encounter.unlockables {
                lines.push(format!("+ {unlockable}"));
            }
        }
        lines
    }

    /// Number of logged encounters
    #[must_use]
    pub fn len(&self) -> usize {
        self.encounters.len()
    }

    /// Whether nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encounters.is_empty()
    }
}
