use std::io::{BufRead, Write};

use super::form::EncounterForm;
use super::{EXIT, Flow, HELP, Menu, MenuError, MenuOption};
use crate::models::Campaign;
use crate::storage::SaveName;

const OPTIONS: [MenuOption; 5] = [
    HELP,
    EXIT,
    MenuOption {
        key: "list",
        description: "LIST encounters so far",
    },
    MenuOption {
        key: "add",
        description: "ADD new encounter",
    },
    MenuOption {
        key: "close",
        description: "CLOSE save and go back to main interface",
    },
];

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    /// Screen for one open campaign save.
    ///
    /// Returns [`Flow::Stay`] when the save is closed so the main menu
    /// shows again.
    pub(super) fn save_menu(
        &mut self,
        name: &SaveName,
        mut campaign: Campaign,
    ) -> Result<Flow, MenuError> {
        let header = format!("What would you like to do with campaign save '{name}'?");
        loop {
            let flow = match OPTIONS[self.present(&header, &OPTIONS)?].key {
                "help" => self.print_help()?,
                "list" => self.list_encounters(&campaign)?,
                "add" => self.add_encounter(name, &mut campaign)?,
                "close" => Flow::Close,
                _ => Flow::Exit,
            };
            match flow {
                Flow::Stay => {},
                Flow::Close => return Ok(Flow::Stay),
                Flow::Exit => return Ok(Flow::Exit),
            }
        }
    }

    fn list_encounters(&mut self, campaign: &Campaign) -> Result<Flow, MenuError> {
        self.prompt.say("Your encounters so far were:")?;
        for line in campaign.lines() {
            self.prompt.say(line)?;
        }
        Ok(Flow::Stay)
    }

    fn add_encounter(&mut self, name: &SaveName, campaign: &mut Campaign) -> Result<Flow, MenuError> {
        let encounter = EncounterForm::new(&mut self.prompt, campaign).played()?;
        log::debug!("Adding {encounter} to '{name}'");
        campaign.push(encounter);
        self.store.write(name, &campaign.to_document()?)?;
        Ok(Flow::Stay)
    }
}
