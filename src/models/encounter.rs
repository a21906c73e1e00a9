//! Encounter model
//!
//! Every kind of encounter is one variant of [`EncounterKind`]. Records are
//! stored as flat tagged objects:
//!
//! ```json
//! { "type": "Scenario", "identifier": 1, "name": "Black Barrow",
//!   "grid_location": { "character": "G", "number": 10 },
//!   "outcome": "success", "unlockables": [] }
//! ```
//!
//! Unknown `type` tags fail to decode.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GridLocation;

/// Event card option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    /// Option A
    A,
    /// Option B
    B,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

impl std::str::FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            _ => Err(format!("Invalid choice: {s}. Use: A, B")),
        }
    }
}

/// Result of playing a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Scenario completed
    Success,
    /// Scenario failed
    Failure,
}

impl From<bool> for Outcome {
    fn from(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// How an encounter of a given type is identified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierScheme {
    /// Card or scenario number chosen by the player
    Number,
    /// Number assigned automatically, one above the previous one
    Incremental,
    /// Free-form name
    Name,
}

/// Encounter type without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncounterType {
    /// Scenario played on the map
    Scenario,
    /// Personal quest
    Quest,
    /// Road event card
    RoadEvent,
    /// City event card
    CityEvent,
    /// Treasure looted
    Treasure,
    /// Item design unlocked
    ItemDesign,
    /// Sanctuary donation
    Donation,
    /// Ancient technology unlocked
    AncientTechnology,
    /// Global achievement
    GlobalAchievement,
    /// Party achievement
    PartyAchievement,
    /// Character class
    Character,
}

impl EncounterType {
    /// All types in menu order
    pub const ALL: [Self; 11] = [
        Self::AncientTechnology,
        Self::Character,
        Self::CityEvent,
        Self::Donation,
        Self::GlobalAchievement,
        Self::ItemDesign,
        Self::PartyAchievement,
        Self::Quest,
        Self::RoadEvent,
        Self::Scenario,
        Self::Treasure,
    ];

    /// Lower-case name used in questions
    #[must_use]
    pub const fn friendly_name(self) -> &'static str {
        match self {
            Self::Scenario => "scenario",
            Self::Quest => "quest",
            Self::RoadEvent => "road event",
            Self::CityEvent => "city event",
            Self::Treasure => "treasure",
            Self::ItemDesign => "item design",
            Self::Donation => "donation",
            Self::AncientTechnology => "ancient technology",
            Self::GlobalAchievement => "global achievement",
            Self::PartyAchievement => "party achievement",
            Self::Character => "character",
        }
    }

    /// Capitalized name used in listings
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Scenario => "Scenario",
            Self::Quest => "Quest",
            Self::RoadEvent => "Road Event",
            Self::CityEvent => "City Event",
            Self::Treasure => "Treasure",
            Self::ItemDesign => "Item Design",
            Self::Donation => "Donation",
            Self::AncientTechnology => "Ancient Technology",
            Self::GlobalAchievement => "Global Achievement",
            Self::PartyAchievement => "Party Achievement",
            Self::Character => "Character",
        }
    }

    /// How encounters of this type are identified
    #[must_use]
    pub const fn identifier_scheme(self) -> IdentifierScheme {
        match self {
            Self::Donation | Self::AncientTechnology => IdentifierScheme::Incremental,
            Self::GlobalAchievement | Self::PartyAchievement | Self::Character => {
                IdentifierScheme::Name
            },
            _ => IdentifierScheme::Number,
        }
    }

    /// Numbered types that also carry a name
    #[must_use]
    pub const fn has_title_name(self) -> bool {
        matches!(self, Self::Scenario | Self::Quest)
    }

    /// Look up a type by its friendly name
    #[must_use]
    pub fn from_friendly_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.friendly_name() == name)
    }
}

/// Kind-specific data of an encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[allow(missing_docs)]
pub enum EncounterKind {
    /// A scenario; `outcome` is unset while merely unlocked
    Scenario {
        identifier: u32,
        name: String,
        grid_location: GridLocation,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        outcome: Option<Outcome>,
    },
    /// A personal quest
    Quest { identifier: u32, name: String },
    /// A road event; `choice` is unset while merely unlocked
    RoadEvent {
        identifier: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        choice: Option<Choice>,
    },
    /// A city event; `choice` is unset while merely unlocked
    CityEvent {
        identifier: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        choice: Option<Choice>,
    },
    /// A treasure
    Treasure { identifier: u32 },
    /// An item design
    ItemDesign { identifier: u32 },
    /// A sanctuary donation
    Donation { identifier: u32 },
    /// An ancient technology
    AncientTechnology { identifier: u32 },
    /// A global achievement
    GlobalAchievement { name: String },
    /// A party achievement
    PartyAchievement { name: String },
    /// A character class
    Character { name: String },
}

impl EncounterKind {
    /// The type of this encounter
    #[must_use]
    pub const fn encounter_type(&self) -> EncounterType {
        match self {
            Self::Scenario { .. } => EncounterType::Scenario,
            Self::Quest { .. } => EncounterType::Quest,
            Self::RoadEvent { .. } => EncounterType::RoadEvent,
            Self::CityEvent { .. } => EncounterType::CityEvent,
            Self::Treasure { .. } => EncounterType::Treasure,
            Self::ItemDesign { .. } => EncounterType::ItemDesign,
            Self::Donation { .. } => EncounterType::Donation,
            Self::AncientTechnology { .. } => EncounterType::AncientTechnology,
            Self::GlobalAchievement { .. } => EncounterType::GlobalAchievement,
            Self::PartyAchievement { .. } => EncounterType::PartyAchievement,
            Self::Character { .. } => EncounterType::Character,
        }
    }

    /// Numeric identifier, if this type has one
    #[must_use]
    pub const fn number(&self) -> Option<u32> {
        match self {
            Self::Scenario { identifier, .. }
            | Self::Quest { identifier, .. }
            | Self::RoadEvent { identifier, .. }
            | Self::CityEvent { identifier, .. }
            | Self::Treasure { identifier }
            | Self::ItemDesign { identifier }
            | Self::Donation { identifier }
            | Self::AncientTechnology { identifier } => Some(*identifier),
            Self::GlobalAchievement { .. }
            | Self::PartyAchievement { .. }
            | Self::Character { .. } => None,
        }
    }
}

impl fmt::Display for EncounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.encounter_type().title();
        match self {
            Self::Scenario {
                identifier,
                name,
                grid_location,
                outcome,
            } => {
                write!(f, "{title}: {identifier}. {name} {grid_location}")?;
                if let Some(outcome) = outcome {
                    write!(f, ": {outcome}")?;
                }
                Ok(())
            },
            Self::Quest { identifier, name } => write!(f, "{title}: {identifier}. {name}"),
            Self::RoadEvent { identifier, choice } | Self::CityEvent { identifier, choice } => {
                write!(f, "{title}: {identifier}.")?;
                if let Some(choice) = choice {
                    write!(f, ": {choice}")?;
                }
                Ok(())
            },
            Self::Treasure { identifier }
            | Self::ItemDesign { identifier }
            | Self::Donation { identifier }
            | Self::AncientTechnology { identifier } => write!(f, "{title}: {identifier}."),
            Self::GlobalAchievement { name }
            | Self::PartyAchievement { name }
            | Self::Character { name } => write!(f, "{title}: {name}"),
        }
    }
}

/// A logged encounter and whatever it unlocked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    /// What happened
    #[serde(flatten)]
    pub kind: EncounterKind,

    /// Encounters made available by this one
    #[serde(default)]
    pub unlockables: Vec<Encounter>,
}

impl Encounter {
    /// An encounter that unlocked nothing
    #[must_use]
    pub const fn new(kind: EncounterKind) -> Self {
        Self {
            kind,
            unlockables: Vec::new(),
        }
    }

    /// The type of this encounter
    #[must_use]
    pub const fn encounter_type(&self) -> EncounterType {
        self.kind.encounter_type()
    }
}

impl From<EncounterKind> for Encounter {
    fn from(kind: EncounterKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Encounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
