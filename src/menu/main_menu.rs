use std::io::{BufRead, Write};

use super::{EXIT, Flow, HELP, Menu, MenuError, MenuOption};
use crate::menu::prompt::format_options;
use crate::models::Campaign;
use crate::storage::SaveName;

const NEW: MenuOption = MenuOption {
    key: "new",
    description: "Create NEW campaign save file",
};

const LOAD: MenuOption = MenuOption {
    key: "load",
    description: "LOAD a campaign save file",
};

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    /// Top-level screen
    pub(super) fn main_menu(&mut self) -> Result<Flow, MenuError> {
        let saves: Vec<SaveName> = self.store.list_saves()?.into_iter().collect();

        let mut options = vec![HELP, EXIT, NEW];
        if !saves.is_empty() {
            options.push(LOAD);
        }

        let chosen = options[self.present("What would you like to do?", &options)?];
        match chosen.key {
            "help" => self.print_help(),
            "new" => self.new_campaign(&saves),
            "load" => self.load_campaign(&saves),
            _ => Ok(Flow::Exit),
        }
    }

    fn new_campaign(&mut self, taken: &[SaveName]) -> Result<Flow, MenuError> {
        if !taken.is_empty() {
            self.prompt
                .say("The following campaign save names are already taken:")?;
            self.prompt.say(format_options(taken))?;
        }

        let name = loop {
            self.prompt
                .say("Campaign save names will be converted to lower case.")?;
            let raw = self
                .prompt
                .ask_text("How would you like to call your campaign save file?")?;
            match SaveName::new(&raw) {
                Ok(name) if taken.contains(&name) || self.store.exists(&name) => {
                    self.prompt.say("Save already exists.")?;
                },
                Ok(name) => break name,
                Err(e) => self.prompt.say(e)?,
            }
        };

        let campaign = Campaign::new();
        self.store.write(&name, &campaign.to_document()?)?;
        log::debug!("Created campaign save '{name}'");

        self.save_menu(&name, campaign)
    }

    fn load_campaign(&mut self, saves: &[SaveName]) -> Result<Flow, MenuError> {
        self.prompt.say("Which save would you like to load?")?;
        let names: Vec<&str> = saves.iter().map(SaveName::as_str).collect();
        let name = &saves[self.prompt.choose("", &names)?];

        let campaign = Campaign::from_document(&self.store.read(name)?)?;
        log::debug!("Loaded '{name}' with {} encounter(s)", campaign.len());

        self.save_menu(name, campaign)
    }
}
