//! Crash reconciliation
//!
//! A rotation is the rename sequence
//!
//! ```text
//! a. write incoming        (fully synced before anything else happens)
//! b. backup   -> stale     (only if a backup exists)
//! c. current  -> backup
//! d. incoming -> current
//! e. delete stale
//! ```
//!
//! A crash can leave any prefix of it on disk. [`GenerationState::plan`]
//! looks only at which artifacts exist and returns the steps that bring the
//! save back to its steady state (`current`, optionally `backup`):
//!
//! | on disk                 | interrupted after | repair                               |
//! |-------------------------|-------------------|--------------------------------------|
//! | C N [B]                 | a                 | discard N                            |
//! | C N S                   | b                 | discard N, S -> B                    |
//! | N B [S]                 | c                 | N -> C, discard S                    |
//! | C B S                   | d                 | discard S                            |
//!
//! An incoming file next to a current one may be partially written, so it is
//! dropped. An incoming file without a current one can only exist after step
//! (c), which implies step (a) completed, so it is promoted. Orphaned backup
//! or stale files fill the first empty slot instead of being deleted.

use std::fmt;

use serde::Serialize;

/// One of the four files a save can have on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Artifact {
    /// The canonical file
    Current,
    /// A newly written document that is not yet canonical
    Incoming,
    /// The previous generation
    Backup,
    /// A backup being retired
    Stale,
}

impl Artifact {
    /// Every artifact, canonical first
    pub const ALL: [Self; 4] = [Self::Current, Self::Incoming, Self::Backup, Self::Stale];
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Incoming => write!(f, "incoming"),
            Self::Backup => write!(f, "backup"),
            Self::Stale => write!(f, "stale"),
        }
    }
}

/// A single repair action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RepairStep {
    /// Rename one artifact onto another (the target slot is empty)
    Rename {
        /// Source artifact
        from: Artifact,
        /// Destination artifact
        to: Artifact,
    },
    /// Delete an artifact that is superseded
    Discard {
        /// Artifact to delete
        artifact: Artifact,
    },
}

impl fmt::Display for RepairStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rename { from, to } => write!(f, "rename {from} -> {to}"),
            Self::Discard { artifact } => write!(f, "discard {artifact}"),
        }
    }
}

/// Which artifacts of a save exist on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationState {
    /// Canonical file present
    pub current: bool,
    /// Incoming file present
    pub incoming: bool,
    /// Backup file present
    pub backup: bool,
    /// Stale file present
    pub stale: bool,
}

impl GenerationState {
    /// Whether the artifact is present
    #[must_use]
    pub const fn has(&self, artifact: Artifact) -> bool {
        match artifact {
            Artifact::Current => self.current,
            Artifact::Incoming => self.incoming,
            Artifact::Backup => self.backup,
            Artifact::Stale => self.stale,
        }
    }

    const fn set(&mut self, artifact: Artifact, present: bool) {
        match artifact {
            Artifact::Current => self.current = present,
            Artifact::Incoming => self.incoming = present,
            Artifact::Backup => self.backup = present,
            Artifact::Stale => self.stale = present,
        }
    }

    /// No artifact at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.current || self.incoming || self.backup || self.stale)
    }

    /// Only `current` and optionally `backup`
    #[must_use]
    pub const fn is_steady(&self) -> bool {
        !self.incoming && !self.stale && (self.current || !self.backup)
    }

    /// The state after applying `step`
    #[must_use]
    pub fn after(mut self, step: RepairStep) -> Self {
        match step {
            RepairStep::Rename { from, to } => {
                self.set(from, false);
                self.set(to, true);
            },
            RepairStep::Discard { artifact } => self.set(artifact, false),
        }
        self
    }

    /// Steps that bring this state back to a steady one.
    ///
    /// Empty when the state is already steady.
    #[must_use]
    pub fn plan(self) -> Vec<RepairStep> {
        let mut steps = Vec::new();
        let mut state = self;
        let mut push = |state: &mut Self, step: RepairStep| {
            *state = state.after(step);
            steps.push(step);
        };

        if state.incoming {
            let step = if state.current {
                RepairStep::Discard {
                    artifact: Artifact::Incoming,
                }
            } else {
                RepairStep::Rename {
                    from: Artifact::Incoming,
                    to: Artifact::Current,
                }
            };
            push(&mut state, step);
        }

        if !state.current && state.backup {
            push(
                &mut state,
                RepairStep::Rename {
                    from: Artifact::Backup,
                    to: Artifact::Current,
                },
            );
        }

        if state.stale {
            let step = if !state.current {
                RepairStep::Rename {
                    from: Artifact::Stale,
                    to: Artifact::Current,
                }
            } else if !state.backup {
                RepairStep::Rename {
                    from: Artifact::Stale,
                    to: Artifact::Backup,
                }
            } else {
                RepairStep::Discard {
                    artifact: Artifact::Stale,
                }
            };
            push(&mut state, step);
        }

        steps
    }
}
