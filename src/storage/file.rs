//! File-based save store
//!
//! Every save lives in the save root as `<name>.json.gml`, with the previous
//! generation kept next to it as `<name>.json.gml.prev`. Writes never modify
//! an existing file in place: the new document is written and synced under
//! a fresh name first, and only then renamed into position.

use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::reconcile::{Artifact, GenerationState, RepairStep};
use super::{ReconcilePolicy, SaveName, SaveStore, StoreError};
use crate::paths;

/// Save store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    root: PathBuf,
    policy: ReconcilePolicy,
}

impl FileSaveStore {
    /// Create a store without touching the filesystem.
    ///
    /// Interrupted rotations are repaired lazily, when a save is first listed
    /// or read.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy: ReconcilePolicy::Lazy,
        }
    }

    /// Open a store, sweeping the directory first under the eager policy.
    pub fn open(root: impl Into<PathBuf>, policy: ReconcilePolicy) -> Result<Self, StoreError> {
        let store = Self {
            root: root.into(),
            policy,
        };

        if policy == ReconcilePolicy::Eager {
            for (name, steps) in store.reconcile_all()? {
                log::info!("Recovered save '{name}' ({} repair step(s))", steps.len());
            }
        }

        Ok(store)
    }

    /// The save root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The reconciliation policy in use
    #[must_use]
    pub const fn policy(&self) -> ReconcilePolicy {
        self.policy
    }

    /// Path of one artifact of a save
    #[must_use]
    pub fn artifact_path(&self, name: &SaveName, artifact: Artifact) -> PathBuf {
        let name = name.as_str();
        match artifact {
            Artifact::Current => paths::current_file(&self.root, name),
            Artifact::Incoming => paths::incoming_file(&self.root, name),
            Artifact::Backup => paths::backup_file(&self.root, name),
            Artifact::Stale => paths::stale_file(&self.root, name),
        }
    }

    /// Which artifacts of `name` exist on disk
    #[must_use]
    pub fn inspect(&self, name: &SaveName) -> GenerationState {
        let present = |artifact| self.artifact_path(name, artifact).is_file();
        GenerationState {
            current: present(Artifact::Current),
            incoming: present(Artifact::Incoming),
            backup: present(Artifact::Backup),
            stale: present(Artifact::Stale),
        }
    }

    /// Last modification time of the current generation
    pub fn modified(&self, name: &SaveName) -> Result<SystemTime, StoreError> {
        let path = self.artifact_path(name, Artifact::Current);
        fs::metadata(&path).and_then(|meta| meta.modified()).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(name.to_string())
            } else {
                StoreError::io("stat", path, e)
            }
        })
    }

    /// Repair an interrupted rotation of `name`.
    ///
    /// Returns the steps that were applied; empty when the save was already
    /// consistent.
    pub fn reconcile(&self, name: &SaveName) -> Result<Vec<RepairStep>, StoreError> {
        let steps = self.inspect(name).plan();
        if steps.is_empty() {
            return Ok(steps);
        }

        for step in &steps {
            log::warn!("Save '{name}' was left mid-rotation, applying: {step}");
            match *step {
                RepairStep::Rename { from, to } => {
                    rename(&self.artifact_path(name, from), &self.artifact_path(name, to))?;
                },
                RepairStep::Discard { artifact } => {
                    remove(&self.artifact_path(name, artifact))?;
                },
            }
        }
        self.sync_root()?;

        Ok(steps)
    }

    /// Repair every save in the directory that has leftover artifacts.
    pub fn reconcile_all(&self) -> Result<Vec<(SaveName, Vec<RepairStep>)>, StoreError> {
        let mut repaired = Vec::new();
        for name in self.scan(|_| true)? {
            let steps = self.reconcile(&name)?;
            if !steps.is_empty() {
                repaired.push((name, steps));
            }
        }
        Ok(repaired)
    }

    /// Every save name with at least one artifact matching `keep`
    fn scan(&self, keep: impl Fn(&str) -> bool) -> Result<BTreeSet<SaveName>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(e) => return Err(StoreError::io("list", &self.root, e)),
        };

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io("list", &self.root, e))?;
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if !keep(file_name) {
                continue;
            }
            let Some(stem) = paths::save_name_of(file_name) else {
                continue;
            };
            // Names that would normalize differently cannot be addressed.
            match SaveName::new(stem) {
                Ok(name) if name.as_str() == stem => {
                    names.insert(name);
                },
                _ => log::debug!("Ignoring unaddressable save file {file_name}"),
            }
        }
        Ok(names)
    }

    fn ensure_root(&self) -> Result<(), StoreError> {
        match fs::create_dir(&self.root) {
            Ok(()) => {
                log::debug!("Created save directory {}", self.root.display());
                Ok(())
            },
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.root.is_dir() => Ok(()),
            Err(e) => Err(StoreError::io("create directory", &self.root, e)),
        }
    }

    /// Make renames and new directory entries durable.
    fn sync_root(&self) -> Result<(), StoreError> {
        #[cfg(unix)]
        {
            fs::File::open(&self.root)
                .and_then(|dir| dir.sync_all())
                .map_err(|e| StoreError::io("sync", &self.root, e))?;
        }
        Ok(())
    }

    fn maybe_reconcile(&self, name: &SaveName) -> Result<(), StoreError> {
        if self.policy == ReconcilePolicy::Lazy {
            self.reconcile(name)?;
        }
        Ok(())
    }
}

impl SaveStore for FileSaveStore {
    fn list_saves(&self) -> Result<BTreeSet<SaveName>, StoreError> {
        // A save interrupted after step (c) has no current file until repaired.
        if self.policy == ReconcilePolicy::Lazy {
            for name in self.scan(|_| true)? {
                self.reconcile(&name)?;
            }
        }
        self.scan(|file_name| file_name.ends_with(paths::SAVE_SUFFIX))
    }

    fn exists(&self, name: &SaveName) -> bool {
        if let Err(e) = self.maybe_reconcile(name) {
            log::warn!("Could not repair save '{name}': {e}");
            return !self.inspect(name).is_empty();
        }
        self.artifact_path(name, Artifact::Current).is_file()
    }

    fn read(&self, name: &SaveName) -> Result<String, StoreError> {
        self.maybe_reconcile(name)?;
        let path = self.artifact_path(name, Artifact::Current);
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(name.to_string())
            } else {
                StoreError::io("read", path, e)
            }
        })
    }

    fn read_backup(&self, name: &SaveName) -> Result<Option<String>, StoreError> {
        self.maybe_reconcile(name)?;
        let path = self.artifact_path(name, Artifact::Backup);
        match fs::read_to_string(&path) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io("read", path, e)),
        }
    }

    fn write(&self, name: &SaveName, document: &str) -> Result<(), StoreError> {
        self.ensure_root()?;
        // A leftover incoming file would block step (a) below.
        self.reconcile(name)?;

        let current = self.artifact_path(name, Artifact::Current);
        if !current.is_file() {
            log::debug!("Writing first generation of '{name}'");
            write_new_file(&current, document)?;
            return self.sync_root();
        }

        let incoming = self.artifact_path(name, Artifact::Incoming);
        let backup = self.artifact_path(name, Artifact::Backup);
        let stale = self.artifact_path(name, Artifact::Stale);

        write_new_file(&incoming, document)?;

        if backup.is_file() {
            rename(&backup, &stale)?;
        }
        rename(&current, &backup)?;
        rename(&incoming, &current)?;

        if stale.is_file() {
            remove(&stale)?;
        }
        self.sync_root()?;

        log::debug!("Rotated '{name}' to a new generation");
        Ok(())
    }
}

/// Create `path` (which must not exist), write `contents` and sync it.
fn write_new_file(path: &Path, contents: &str) -> Result<(), StoreError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| StoreError::io("create", path, e))?;
    file.write_all(contents.as_bytes()).map_err(|e| StoreError::io("write", path, e))?;
    file.sync_all().map_err(|e| StoreError::io("sync", path, e))?;
    Ok(())
}

fn rename(from: &Path, to: &Path) -> Result<(), StoreError> {
    log::debug!("rename {} -> {}", from.display(), to.display());
    fs::rename(from, to).map_err(|e| StoreError::Io {
        action: "rename",
        path: from.to_path_buf(),
        source: e,
    })
}

fn remove(path: &Path) -> Result<(), StoreError> {
    log::debug!("remove {}", path.display());
    fs::remove_file(path).map_err(|e| StoreError::io("remove", path, e))
}
