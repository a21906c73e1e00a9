//! Configuration
//!
//! Settings are layered, later layers winning:
//!
//! 1. built-in defaults
//! 2. global file `~/.gloomlog/config.toml`
//! 3. per-directory file `./gloomlog.toml`
//! 4. `GLOOMLOG_SAVE_DIR` environment variable
//! 5. `--save-dir` command-line flag
//!
//! ```toml
//! [storage]
//! save_dir = "__gloomsave__"
//! reconcile = "eager"   # or "lazy"
//!
//! [ui]
//! color = true
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;
use crate::storage::ReconcilePolicy;

/// Environment variable overriding the save directory
pub const SAVE_DIR_ENV: &str = "GLOOMLOG_SAVE_DIR";

/// Errors loading configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Effective gloomlog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Save storage settings
    pub storage: StorageConfig,
    /// Terminal settings
    pub ui: UiConfig,
}

/// Save storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageConfig {
    /// Directory holding save files
    pub save_dir: PathBuf,
    /// When interrupted rotations are repaired
    pub reconcile: ReconcilePolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from(paths::DEFAULT_SAVE_DIR),
            reconcile: ReconcilePolicy::default(),
        }
    }
}

/// Terminal settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiConfig {
    /// Colorize menu headers
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// One config file; every key optional so files can be partial
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    storage: StorageLayer,
    #[serde(default)]
    ui: UiLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StorageLayer {
    save_dir: Option<PathBuf>,
    reconcile: Option<ReconcilePolicy>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct UiLayer {
    color: Option<bool>,
}

impl ConfigLayer {
    /// Read a layer; a missing file is an empty layer
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            },
        };
        log::debug!("Loaded config layer {}", path.display());
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Load from the standard locations.
    ///
    /// `save_dir` is the command-line override, if any.
    pub fn load(save_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let env_dir = std::env::var_os(SAVE_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::load_from(
            &[paths::global_config(), paths::project_config()],
            env_dir,
            save_dir,
        )
    }

    /// Load from explicit file layers, then apply overrides
    pub fn load_from(
        files: &[PathBuf],
        env_save_dir: Option<PathBuf>,
        cli_save_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for path in files {
            config.apply(ConfigLayer::read(path)?);
        }
        if let Some(dir) = cli_save_dir.or(env_save_dir) {
            config.storage.save_dir = dir;
        }
        Ok(config)
    }

    fn apply(&mut self, layer: ConfigLayer) {
        if let Some(dir) = layer.storage.save_dir {
            self.storage.save_dir = dir;
        }
        if let Some(policy) = layer.storage.reconcile {
            self.storage.reconcile = policy;
        }
        if let Some(color) = layer.ui.color {
            self.ui.color = color;
        }
    }
}
