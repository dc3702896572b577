//! Row selection state.
//!
//! The tracker is deliberately independent of the record store: ids stay
//! selected when they are filtered out of view or deleted. Callers that act
//! on a selection reconcile it against a snapshot first.

use std::collections::BTreeSet;

use roster_model::EmployeeId;

use crate::store::RecordSnapshot;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<EmployeeId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection, as a bulk checkbox change does.
    pub fn select<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = EmployeeId>,
    {
        self.selected = ids.into_iter().collect();
    }

    pub fn toggle(&mut self, id: EmployeeId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn current(&self) -> BTreeSet<EmployeeId> {
        self.selected.clone()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids that still exist in `snapshot`. The tracker is not pruned.
    pub fn reconcile(&self, snapshot: &RecordSnapshot) -> BTreeSet<EmployeeId> {
        snapshot.ids().filter(|id| self.selected.contains(id)).collect()
    }
}
