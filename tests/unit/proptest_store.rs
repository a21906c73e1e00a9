//! Property-based tests for the save store
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::BTreeSet;

use gloomlog::storage::{Artifact, GenerationState, SaveStore};
use proptest::prelude::*;

use crate::common::{SaveDir, save};

fn any_state() -> impl Strategy<Value = GenerationState> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(current, incoming, backup, stale)| GenerationState {
            current,
            incoming,
            backup,
            stale,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every read returns the latest write, and the backup the one before
    #[test]
    fn reads_follow_writes(documents in prop::collection::vec("[a-z{}\\[\\]\" ]{0,24}", 1..6)) {
        let dir = SaveDir::new();
        let store = dir.store();
        let name = save("prop");

        for (i, document) in documents.iter().enumerate() {
            store.write(&name, document).unwrap();
            prop_assert_eq!(&store.read(&name).unwrap(), document);
            let expected_backup = i.checked_sub(1).map(|p| documents[p].clone());
            prop_assert_eq!(store.read_backup(&name).unwrap(), expected_backup);
        }
        prop_assert!(dir.files().len() <= 2);
    }

    /// Reconciling any combination of leftovers ends in a steady state
    /// that still has a current document
    #[test]
    fn reconcile_reaches_steady_state(state in any_state()) {
        prop_assume!(!state.is_empty());

        let dir = SaveDir::new();
        let mut contents = BTreeSet::new();
        for artifact in Artifact::ALL {
            if state.has(artifact) {
                dir.put("prop", artifact, &artifact.to_string());
                contents.insert(artifact.to_string());
            }
        }
        let store = dir.store();
        let name = save("prop");

        let steps = store.reconcile(&name).unwrap();
        let after = store.inspect(&name);

        prop_assert_eq!(steps.iter().fold(state, |s, step| s.after(*step)), after);
        prop_assert!(after.is_steady());
        prop_assert!(after.current);
        prop_assert!(contents.contains(&store.read(&name).unwrap()));
        prop_assert!(store.reconcile(&name).unwrap().is_empty());
    }

    /// The planned steps never touch a steady state
    #[test]
    fn steady_states_need_no_plan(state in any_state()) {
        prop_assume!(state.is_steady());
        prop_assert!(state.plan().is_empty());
    }
}
