//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use gloomlog::config::Config;
use gloomlog::output::OutputMode;
use gloomlog::storage::FileSaveStore;

/// gloomlog - Campaign log for Gloomhaven
#[derive(Parser, Debug)]
#[command(
    name = "gloomlog",
    version,
    about = "Campaign log for Gloomhaven",
    long_about = "Keep a log of everything your Gloomhaven party encounters.\n\n\
                  Run without a command for the interactive menu. Every save keeps\n\
                  one previous generation and survives interrupted writes."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding campaign saves
    #[arg(long, global = true, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive menu (default)
    Menu,

    /// List campaign saves
    List,

    /// Print the encounters of a save
    Show {
        /// Save name
        name: String,
    },

    /// Show the files of a save and any interrupted write
    Status {
        /// Save name
        name: String,
    },

    /// Repair interrupted writes
    Repair {
        /// Save name (all saves when omitted)
        name: Option<String>,
    },

    /// Replace a save with its previous generation
    Restore {
        /// Save name
        name: String,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::load(cli.save_dir)?;
    if !config.ui.color || output_mode == OutputMode::Json {
        colored::control::set_override(false);
    }
    let save_dir = config.storage.save_dir.clone();

    match cli.command {
        None | Some(Command::Menu) => {
            let store = FileSaveStore::open(save_dir, config.storage.reconcile)?;
            commands::menu(&store)
        },
        Some(Command::List) => {
            let store = FileSaveStore::open(save_dir, config.storage.reconcile)?;
            commands::list(&store, output_mode)
        },
        Some(Command::Show { name }) => {
            let store = FileSaveStore::open(save_dir, config.storage.reconcile)?;
            commands::show(&store, &name, output_mode)
        },
        // Inspection and repair must see the files as left on disk.
        Some(Command::Status { name }) => {
            commands::status(&FileSaveStore::new(save_dir), &name, output_mode)
        },
        Some(Command::Repair { name }) => {
            commands::repair(&FileSaveStore::new(save_dir), name.as_deref(), output_mode)
        },
        Some(Command::Restore { name }) => {
            let store = FileSaveStore::open(save_dir, config.storage.reconcile)?;
            commands::restore(&store, &name, output_mode)
        },
        Some(Command::Config) => commands::config(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": gloomlog::VERSION
                    })
                );
            } else {
                println!("gloomlog v{}", gloomlog::VERSION);
            }
            Ok(())
        },
    }
}
