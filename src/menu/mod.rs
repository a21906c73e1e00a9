//! Interactive campaign menu
//!
//! Two screens: the main menu (create or load a campaign save) and the save
//! menu (list and add encounters). Every screen action returns a [`Flow`]
//! telling the driver whether to stay on the screen, close it, or leave
//! gloomlog altogether. Each added encounter is written through the
//! [`SaveStore`] before the next question is asked.

mod form;
mod main_menu;
pub mod prompt;
mod save_menu;

use std::io::{BufRead, Write};

use colored::Colorize;
use thiserror::Error;

use crate::models::ModelError;
use crate::storage::{SaveStore, StoreError};
use prompt::{Prompt, PromptError, format_options};

/// What happens after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the same screen again
    Stay,
    /// Return to the parent screen
    Close,
    /// Leave gloomlog
    Exit,
}

/// Errors that end an interactive session
#[derive(Debug, Error)]
pub enum MenuError {
    /// Talking to the player failed
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Save storage failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A save document could not be decoded or encoded
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// One entry of a menu screen
#[derive(Debug, Clone, Copy)]
struct MenuOption {
    key: &'static str,
    description: &'static str,
}

const HELP: MenuOption = MenuOption {
    key: "help",
    description: "Show HELP",
};

const EXIT: MenuOption = MenuOption {
    key: "exit",
    description: "EXIT GloomLog",
};

/// Interactive session over a save store
#[derive(Debug)]
pub struct Menu<'s, R, W> {
    store: &'s dyn SaveStore,
    prompt: Prompt<R, W>,
}

impl<'s, R: BufRead, W: Write> Menu<'s, R, W> {
    /// Session reading answers from `input` and printing to `output`
    pub const fn new(store: &'s dyn SaveStore, input: R, output: W) -> Self {
        Self {
            store,
            prompt: Prompt::new(input, output),
        }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Run the main menu until the player exits or input ends
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            match self.main_menu() {
                Ok(Flow::Exit) => break,
                Ok(Flow::Stay | Flow::Close) => {},
                Err(MenuError::Prompt(PromptError::Closed)) => {
                    log::debug!("Input closed, leaving menu");
                    self.prompt.say("")?;
                    break;
                },
                Err(e) => return Err(e),
            }
        }
        self.prompt.say("Bye!")?;
        Ok(())
    }

    /// Print a screen and return the index of the chosen option
    fn present(&mut self, header: &str, options: &[MenuOption]) -> Result<usize, MenuError> {
        let keys: Vec<&str> = options.iter().map(|o| o.key).collect();
        let width = header
            .chars()
            .count()
            .max(format_options(&keys).chars().count() + 1);
        let top = "=".repeat(width);
        let bottom = "-".repeat(width);

        self.prompt.say("")?;
        self.prompt.say(&top)?;
        self.prompt.say(header.bold())?;
        self.prompt.say(&top)?;
        for option in options {
            self.prompt.say(option.description)?;
        }
        self.prompt.say(&bottom)?;

        self.prompt.say("Please choose from")?;
        let index = self.prompt.choose("", &keys)?;
        self.prompt.say(&bottom)?;
        Ok(index)
    }

    fn print_help(&mut self) -> Result<Flow, MenuError> {
        self.prompt.say(":, only literal options")?;
        self.prompt.say("#, literal options + numbered positions")?;
        self.prompt.say("@, literal options + one character shorthands")?;
        self.prompt.say(">, literals + numbers + shorthands")?;
        Ok(Flow::Stay)
    }
}
