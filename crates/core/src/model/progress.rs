use std::collections::BTreeSet;

use crate::model::ids::ModuleId;

/// The set of modules the user has marked as done.
///
/// Membership is idempotent: toggling a member removes it, toggling a
/// non-member adds it exactly once. The set may reference modules that no
/// longer exist in the fetched curriculum; callers must treat such ids as
/// harmless (they are ignored when computing progress).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    completed: BTreeSet<ModuleId>,
}

impl CompletionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from persisted identifiers, deduplicating as it goes.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = ModuleId>) -> Self {
        Self {
            completed: ids.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, id: &ModuleId) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Returns a new set with `id` added if absent, removed if present.
    ///
    /// The receiver is left untouched so callers can keep showing the old
    /// state until the new one has been persisted.
    #[must_use]
    pub fn toggled(&self, id: &ModuleId) -> Self {
        let mut completed = self.completed.clone();
        if !completed.remove(id) {
            completed.insert(id.clone());
        }
        Self { completed }
    }

    /// Identifiers in a stable order, for serialization.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ModuleId> {
        self.completed.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleId> {
        self.completed.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
