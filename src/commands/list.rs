//! List command - show every campaign save

use chrono::{DateTime, Local};
use gloomlog::output::{OutputMode, SaveInfo, SaveListResult};
use gloomlog::storage::{FileSaveStore, SaveStore};

/// List saves with their last write time
pub fn list(store: &FileSaveStore, mode: OutputMode) -> anyhow::Result<()> {
    let mut saves = Vec::new();
    for name in store.list_saves()? {
        let modified: DateTime<Local> = store.modified(&name)?.into();
        saves.push(SaveInfo {
            has_backup: store.inspect(&name).backup,
            modified: modified.format("%Y-%m-%d %H:%M:%S").to_string(),
            name: name.into(),
        });
    }

    SaveListResult {
        save_dir: store.root().display().to_string(),
        saves,
    }
    .render(mode);

    Ok(())
}
