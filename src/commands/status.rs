//! Status command - inspect the files of one save without changing them

use gloomlog::output::{ArtifactInfo, OutputMode, StatusResult};
use gloomlog::storage::{Artifact, FileSaveStore, SaveName};

/// Show which generation files exist and what a repair would do
pub fn status(store: &FileSaveStore, name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let name = SaveName::new(name)?;
    let state = store.inspect(&name);
    if state.is_empty() {
        anyhow::bail!("save not found: {name}");
    }

    let artifacts = Artifact::ALL
        .into_iter()
        .map(|artifact| ArtifactInfo {
            artifact,
            path: store.artifact_path(&name, artifact).display().to_string(),
            present: state.has(artifact),
        })
        .collect();

    StatusResult {
        name: name.into(),
        artifacts,
        steady: state.is_steady(),
        pending: state.plan(),
    }
    .render(mode);

    Ok(())
}
