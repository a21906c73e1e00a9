//! Centralized path definitions for gloomlog
//!
//! This module is the single source of truth for file names on disk.
//! Existing save directories depend on these names, so they must not change.
//!
//! ## Storage Layout
//!
//! ```text
//! __gloomsave__/                      # Save root (configurable)
//! ├── alice.json.gml                  # current generation
//! ├── alice.json.gml.prev             # backup (previous generation)
//! ├── alice.json.gml.new              # incoming (only mid-rotation)
//! └── alice.json.gml.old              # stale (only mid-rotation)
//!
//! ~/.gloomlog/
//! └── config.toml                     # User preferences
//!
//! ./gloomlog.toml                     # Per-directory overrides
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Save artifacts
// =============================================================================

/// Default save root, relative to the working directory
pub const DEFAULT_SAVE_DIR: &str = "__gloomsave__";

/// Suffix of the canonical (current) save file
pub const SAVE_SUFFIX: &str = ".json.gml";

/// Suffix appended to the canonical path for the incoming file
pub const INCOMING_SUFFIX: &str = ".new";

/// Suffix appended to the canonical path for the backup file
pub const BACKUP_SUFFIX: &str = ".prev";

/// Suffix appended to the canonical path for the stale file
pub const STALE_SUFFIX: &str = ".old";

/// Path of the canonical save file for `name` inside `dir`.
#[must_use]
pub fn current_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}{SAVE_SUFFIX}"))
}

/// Path of the incoming file for `name`.
#[must_use]
pub fn incoming_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}{SAVE_SUFFIX}{INCOMING_SUFFIX}"))
}

/// Path of the backup file for `name`.
#[must_use]
pub fn backup_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}{SAVE_SUFFIX}{BACKUP_SUFFIX}"))
}

/// Path of the stale file for `name`.
#[must_use]
pub fn stale_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}{SAVE_SUFFIX}{STALE_SUFFIX}"))
}

/// Extract the save name from any artifact file name.
///
/// Returns `None` for files that do not belong to the store.
#[must_use]
pub fn save_name_of(file_name: &str) -> Option<&str> {
    let stem = [INCOMING_SUFFIX, BACKUP_SUFFIX, STALE_SUFFIX]
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .unwrap_or(file_name);
    stem.strip_suffix(SAVE_SUFFIX).filter(|name| !name.is_empty())
}

// =============================================================================
// Configuration files
// =============================================================================

/// Per-directory configuration filename
pub const PROJECT_CONFIG_FILE: &str = "gloomlog.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".gloomlog";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global gloomlog directory.
///
/// Returns `~/.gloomlog/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the per-directory config file path.
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG_FILE)
}
