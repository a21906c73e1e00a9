//! Repair command - finish or roll back interrupted writes

use gloomlog::output::{OutputMode, RepairResult, RepairedSave};
use gloomlog::storage::{FileSaveStore, SaveName};

/// Reconcile one save, or every save when `name` is `None`
pub fn repair(store: &FileSaveStore, name: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let repaired = match name {
        Some(name) => {
            let name = SaveName::new(name)?;
            if store.inspect(&name).is_empty() {
                anyhow::bail!("save not found: {name}");
            }
            let steps = store.reconcile(&name)?;
            if steps.is_empty() {
                Vec::new()
            } else {
                vec![(name, steps)]
            }
        },
        None => store.reconcile_all()?,
    };

    RepairResult {
        repaired: repaired
            .into_iter()
            .map(|(name, steps)| RepairedSave {
                name: name.into(),
                steps,
            })
            .collect(),
    }
    .render(mode);

    Ok(())
}
