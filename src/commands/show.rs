//! Show command - print the encounters of one save

use anyhow::Context;
use gloomlog::models::Campaign;
use gloomlog::output::{CampaignResult, OutputMode};
use gloomlog::storage::{FileSaveStore, SaveName, SaveStore};

/// Print a campaign save
pub fn show(store: &FileSaveStore, name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let name = SaveName::new(name)?;
    let document = store.read(&name)?;
    let campaign = Campaign::from_document(&document)
        .with_context(|| format!("save '{name}' is not a valid campaign"))?;

    CampaignResult {
        name: name.into(),
        campaign,
    }
    .render(mode);

    Ok(())
}
