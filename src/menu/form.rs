//! Questions that build a new encounter

use std::io::{BufRead, Write};

use super::MenuError;
use super::prompt::Prompt;
use crate::models::grid::{FIRST_COLUMN, LAST_COLUMN, LAST_ROW};
use crate::models::{
    Campaign, Choice, Encounter, EncounterKind, EncounterType, GridLocation, IdentifierScheme,
};

const MAX_IDENTIFIER: u32 = 999;

/// Asks for the fields of one encounter
pub(super) struct EncounterForm<'a, R, W> {
    prompt: &'a mut Prompt<R, W>,
    campaign: &'a Campaign,
}

impl<'a, R: BufRead, W: Write> EncounterForm<'a, R, W> {
    pub(super) const fn new(prompt: &'a mut Prompt<R, W>, campaign: &'a Campaign) -> Self {
        Self { prompt, campaign }
    }

    /// A played encounter: basics, its result, then anything it unlocked
    pub(super) fn played(mut self) -> Result<Encounter, MenuError> {
        let mut kind = self.basics()?;

        match &mut kind {
            EncounterKind::Scenario { outcome, .. } => {
                let success = self
                    .prompt
                    .yes_no("Did you successfully complete the scenario?")?;
                *outcome = Some(success.into());
            },
            EncounterKind::RoadEvent { choice, .. } | EncounterKind::CityEvent { choice, .. } => {
                let index = self.prompt.choose("Which option did you choose?", &["A", "B"])?;
                *choice = Some(if index == 0 { Choice::A } else { Choice::B });
            },
            _ => {},
        }

        let mut encounter = Encounter::new(kind);
        while self
            .prompt
            .yes_no("Would you like to add an unlocked encounter?")?
        {
            encounter.unlockables.push(Encounter::new(self.basics()?));
        }
        Ok(encounter)
    }

    /// Type, identifier, and for some types a name and map location.
    ///
    /// Outcome and choice are left unset.
    fn basics(&mut self) -> Result<EncounterKind, MenuError> {
        let names = EncounterType::ALL.map(EncounterType::friendly_name);
        let encounter_type = EncounterType::ALL[self.prompt.choose("What type of encounter?", &names)?];
        let friendly = encounter_type.friendly_name();

        let kind = match encounter_type {
            EncounterType::Scenario => EncounterKind::Scenario {
                identifier: self.identifier(encounter_type)?,
                name: self.title_name(friendly)?,
                grid_location: self.grid_location()?,
                outcome: None,
            },
            EncounterType::Quest => EncounterKind::Quest {
                identifier: self.identifier(encounter_type)?,
                name: self.title_name(friendly)?,
            },
            EncounterType::RoadEvent => EncounterKind::RoadEvent {
                identifier: self.identifier(encounter_type)?,
                choice: None,
            },
            EncounterType::CityEvent => EncounterKind::CityEvent {
                identifier: self.identifier(encounter_type)?,
                choice: None,
            },
            EncounterType::Treasure => EncounterKind::Treasure {
                identifier: self.identifier(encounter_type)?,
            },
            EncounterType::ItemDesign => EncounterKind::ItemDesign {
                identifier: self.identifier(encounter_type)?,
            },
            EncounterType::Donation => EncounterKind::Donation {
                identifier: self.identifier(encounter_type)?,
            },
            EncounterType::AncientTechnology => EncounterKind::AncientTechnology {
                identifier: self.identifier(encounter_type)?,
            },
            EncounterType::GlobalAchievement => EncounterKind::GlobalAchievement {
                name: self.identifier_name(friendly)?,
            },
            EncounterType::PartyAchievement => EncounterKind::PartyAchievement {
                name: self.identifier_name(friendly)?,
            },
            EncounterType::Character => EncounterKind::Character {
                name: self.identifier_name(friendly)?,
            },
        };
        Ok(kind)
    }

    fn identifier(&mut self, encounter_type: EncounterType) -> Result<u32, MenuError> {
        if encounter_type.identifier_scheme() == IdentifierScheme::Incremental {
            return Ok(self.campaign.next_identifier(encounter_type));
        }
        let question = format!(
            "What is the {}'s identifier number?",
            encounter_type.friendly_name()
        );
        Ok(self.prompt.choose_number(&question, 1, MAX_IDENTIFIER)?)
    }

    fn identifier_name(&mut self, friendly: &str) -> Result<String, MenuError> {
        Ok(self
            .prompt
            .ask_text(&format!("What is the {friendly}'s identifier name?"))?)
    }

    fn title_name(&mut self, friendly: &str) -> Result<String, MenuError> {
        Ok(self.prompt.ask_text(&format!("What is the {friendly}'s name?"))?)
    }

    fn grid_location(&mut self) -> Result<GridLocation, MenuError> {
        let columns: Vec<String> = GridLocation::columns().map(String::from).collect();
        let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
        let label = format!("({FIRST_COLUMN}-{LAST_COLUMN})");
        let column = self.prompt.choose_labeled(
            "What is the character of that scenario's location?",
            &columns,
            &label,
        )?;
        let row = self.prompt.choose_number(
            "What is the identifier of that scenario's location?",
            1,
            u32::from(LAST_ROW),
        )?;

        let column = GridLocation::columns().nth(column).unwrap_or(FIRST_COLUMN);
        let row = u8::try_from(row).unwrap_or(LAST_ROW);
        Ok(GridLocation::new(column, row)?)
    }
}
