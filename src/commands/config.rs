//! Config command - print the effective configuration

use gloomlog::config::Config;
use gloomlog::output::OutputMode;

/// Print the configuration after all layers and overrides
pub fn config(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputMode::Human => print!("{}", toml::to_string_pretty(config)?),
    }
    Ok(())
}
