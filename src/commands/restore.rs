//! Restore command - bring back the previous generation of a save

use anyhow::Context;
use gloomlog::models::Campaign;
use gloomlog::output::{OperationResult, OutputMode};
use gloomlog::storage::{FileSaveStore, SaveName, SaveStore};

/// Write the backup as a new generation.
///
/// The replaced document becomes the backup, so restoring twice undoes it.
pub fn restore(store: &FileSaveStore, name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let name = SaveName::new(name)?;
    if !store.exists(&name) {
        anyhow::bail!("save not found: {name}");
    }
    let Some(backup) = store.read_backup(&name)? else {
        anyhow::bail!("save '{name}' has no backup to restore");
    };
    Campaign::from_document(&backup)
        .with_context(|| format!("backup of '{name}' is not a valid campaign"))?;

    store.write(&name, &backup)?;
    log::debug!("Restored '{name}' from backup");

    OperationResult {
        success: true,
        message: format!("Restored '{name}' from its backup"),
    }
    .render(mode);

    Ok(())
}
