//! Question helpers for the interactive menu
//!
//! A multiple-choice question accepts:
//! - the literal option text,
//! - the option's 1-based position, when no option starts with a digit,
//! - the option's first character, when all first characters differ.
//!
//! The question ends with an indicator telling the player which of these
//! apply: `:` literal only, `#` literal and numbers, `@` literal and
//! shorthands, `>` all three.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors while talking to the player
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end of file
    #[error("input closed")]
    Closed,

    /// Terminal I/O failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Why an answer was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not an option, number or shorthand
    Invalid,
    /// A position past the last option
    OutOfBounds,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid => write!(f, "Invalid input"),
            Self::OutOfBounds => write!(f, "Inputted number out of option bounds"),
        }
    }
}

/// Resolves answers to a fixed set of options
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    options: &'a [&'a str],
    numbered: bool,
    shorthands: HashMap<char, usize>,
}

impl<'a> Selector<'a> {
    /// Work out which answer forms the options allow
    #[must_use]
    pub fn new(options: &'a [&'a str]) -> Self {
        let firsts: Vec<Option<char>> = options.iter().map(|o| o.chars().next()).collect();
        let numbered = !firsts.iter().flatten().any(char::is_ascii_digit);

        let mut shorthands = HashMap::new();
        for (index, first) in firsts.iter().enumerate() {
            if let Some(first) = first {
                shorthands.insert(*first, index);
            }
        }
        if shorthands.len() != options.len() {
            shorthands.clear();
        }

        Self {
            options,
            numbered,
            shorthands,
        }
    }

    /// The indicator character shown after the options
    #[must_use]
    pub fn indicator(&self) -> char {
        match (self.numbered, !self.shorthands.is_empty()) {
            (false, false) => ':',
            (true, false) => '#',
            (false, true) => '@',
            (true, true) => '>',
        }
    }

    /// Index of the option the answer selects
    pub fn resolve(&self, answer: &str) -> Result<usize, Rejection> {
        if let Some(index) = self.options.iter().position(|o| *o == answer) {
            return Ok(index);
        }

        let mut chars = answer.chars();
        if let (Some(first), None) = (chars.next(), chars.next())
            && let Some(&index) = self.shorthands.get(&first)
        {
            return Ok(index);
        }

        if !self.numbered {
            return Err(Rejection::Invalid);
        }
        match answer.parse::<usize>() {
            Ok(position) if position > 0 && position <= self.options.len() => Ok(position - 1),
            Ok(position) if position > 0 => Err(Rejection::OutOfBounds),
            _ => Err(Rejection::Invalid),
        }
    }
}

/// Render options as `(a, b, c)`
#[must_use]
pub fn format_options<S: AsRef<str>>(options: &[S]) -> String {
    let joined: Vec<&str> = options.iter().map(AsRef::as_ref).collect();
    format!("({})", joined.join(", "))
}

/// Line-oriented conversation with the player
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Wrap an input and output stream
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `question` and read one line of free text
    pub fn ask_text(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask until one of `options` is chosen; returns its index
    pub fn choose(&mut self, question: &str, options: &[&str]) -> Result<usize, PromptError> {
        self.choose_labeled(question, options, &format_options(options))
    }

    /// Like [`Prompt::choose`] with a custom rendering of the options
    pub fn choose_labeled(
        &mut self,
        question: &str,
        options: &[&str],
        label: &str,
    ) -> Result<usize, PromptError> {
        let selector = Selector::new(options);
        let separator = if question.is_empty() { "" } else { " " };
        loop {
            write!(self.output, "{question}{separator}{label}{} ", selector.indicator())?;
            self.output.flush()?;
            let answer = self.read_line()?;
            match selector.resolve(&answer) {
                Ok(index) => return Ok(index),
                Err(rejection) => self.say(rejection)?,
            }
        }
    }

    /// Ask until a number in `min..=max` is given
    pub fn choose_number(&mut self, question: &str, min: u32, max: u32) -> Result<u32, PromptError> {
        loop {
            write!(self.output, "{question} ({min}-{max}): ")?;
            self.output.flush()?;
            match self.read_line()?.parse::<u32>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                Ok(_) => self.say(Rejection::OutOfBounds)?,
                Err(_) => self.say(Rejection::Invalid)?,
            }
        }
    }

    /// Ask a yes/no question
    pub fn yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        Ok(self.choose(question, &["yes", "no"])? == 0)
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
