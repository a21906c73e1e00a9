//! Output formatting for human and JSON modes
//!
//! Every command builds one of these result types and renders it either as
//! human-readable text or as pretty JSON.

use colored::Colorize;
use serde::Serialize;

use crate::models::Campaign;
use crate::storage::{Artifact, RepairStep};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of listing saves
#[derive(Debug, Serialize)]
pub struct SaveListResult {
    /// Directory that was scanned
    pub save_dir: String,
    /// Saves found, sorted by name
    pub saves: Vec<SaveInfo>,
}

/// One save in a listing
#[derive(Debug, Serialize)]
pub struct SaveInfo {
    /// Save name
    pub name: String,
    /// Last write of the current generation, local time
    pub modified: String,
    /// Whether a previous generation is kept
    pub has_backup: bool,
}

/// A decoded campaign save
#[derive(Debug, Serialize)]
pub struct CampaignResult {
    /// Save name
    pub name: String,
    /// The campaign document
    pub campaign: Campaign,
}

/// On-disk state of one save
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Save name
    pub name: String,
    /// Each artifact and whether it exists
    pub artifacts: Vec<ArtifactInfo>,
    /// Whether no rotation is in progress
    pub steady: bool,
    /// Steps a repair would apply
    pub pending: Vec<RepairStep>,
}

/// One file of a save
#[derive(Debug, Serialize)]
pub struct ArtifactInfo {
    /// Which generation slot
    pub artifact: Artifact,
    /// File path
    pub path: String,
    /// Whether the file exists
    pub present: bool,
}

/// Result of a repair run
#[derive(Debug, Serialize)]
pub struct RepairResult {
    /// Saves that needed repair
    pub repaired: Vec<RepairedSave>,
}

/// Steps applied to one save
#[derive(Debug, Serialize)]
pub struct RepairedSave {
    /// Save name
    pub name: String,
    /// Steps applied, in order
    pub steps: Vec<RepairStep>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl SaveListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.saves.is_empty() {
            println!("No campaign saves in {}", self.save_dir);
            return;
        }

        println!("Campaign saves in {}:\n", self.save_dir);
        for save in &self.saves {
            let backup = if save.has_backup { "" } else { "  (no backup)" };
            let name = format!("{:<20}", save.name);
            println!("  {} {}{}", name.bold(), save.modified, backup);
        }
    }
}

impl CampaignResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", format!("Campaign save '{}'", self.name).bold());
        println!("{} encounter(s)\n", self.campaign.len());
        for line in self.campaign.lines() {
            println!("{line}");
        }
    }
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Save: {}\n", self.name);
        for info in &self.artifacts {
            let mark = if info.present { "present" } else { "-" };
            println!("  {:<9} {:<8} {}", info.artifact.to_string(), mark, info.path);
        }
        println!();

        if self.steady {
            println!("No interrupted write.");
        } else {
            println!("{}", "Interrupted write detected. Repair would:".yellow());
            for step in &self.pending {
                println!("  • {step}");
            }
            println!("\nTo repair: gloomlog repair {}", self.name);
        }
    }
}

impl RepairResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.repaired.is_empty() {
            println!("Nothing to repair.");
            return;
        }

        for save in &self.repaired {
            println!("Repaired '{}':", save.name);
            for step in &save.steps {
                println!("  • {step}");
            }
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
