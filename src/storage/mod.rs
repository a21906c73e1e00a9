//! Save storage
//!
//! Campaign documents are opaque text to this layer. The only backend is
//! [`FileSaveStore`], which keeps one current generation and one backup per
//! save and rotates them with a crash-safe rename sequence.

mod error;
/// File-based store with generation rotation
pub mod file;
mod name;
/// Crash reconciliation planning
pub mod reconcile;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::StoreError;
pub use file::FileSaveStore;
pub use name::SaveName;
pub use reconcile::{Artifact, GenerationState, RepairStep};

/// Storage backend for campaign documents
pub trait SaveStore: fmt::Debug + Send + Sync {
    /// Names of all saves that have a current generation
    fn list_saves(&self) -> Result<BTreeSet<SaveName>, StoreError>;

    /// Whether a current generation exists for `name`
    fn exists(&self, name: &SaveName) -> bool;

    /// Read the current generation
    fn read(&self, name: &SaveName) -> Result<String, StoreError>;

    /// Read the previous generation, if one is kept
    fn read_backup(&self, name: &SaveName) -> Result<Option<String>, StoreError>;

    /// Durably replace the current generation with `document`
    fn write(&self, name: &SaveName, document: &str) -> Result<(), StoreError>;
}

/// When interrupted rotations are repaired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ReconcilePolicy {
    /// Sweep the whole save directory when the store is opened
    #[default]
    Eager,
    /// Repair each save the first time it is listed or read
    Lazy,
}

impl fmt::Display for ReconcilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eager => f.write_str("eager"),
            Self::Lazy => f.write_str("lazy"),
        }
    }
}

impl std::str::FromStr for ReconcilePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eager" | "startup" => Ok(Self::Eager),
            "lazy" | "on-access" => Ok(Self::Lazy),
            _ => Err(format!("Unknown reconcile policy: {s}. Use 'eager' or 'lazy'")),
        }
    }
}

impl TryFrom<String> for ReconcilePolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
