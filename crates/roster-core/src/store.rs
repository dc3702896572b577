//! Canonical ordered record collection.
//!
//! The store owns the only mutable copy of the records. Readers receive
//! [`RecordSnapshot`]s that share storage with the store until the next
//! mutation, which copies on write so that outstanding snapshots never change.

use std::collections::{HashMap, HashSet};
use std::ops::Deref;
use std::sync::Arc;

use tracing::info;

use roster_model::{EmployeeId, EmployeeRecord, RecordPatch, Result, RosterError, ValidationError};

/// Read-only view of the store contents at one version.
#[derive(Debug, Clone, Default)]
pub struct RecordSnapshot {
    records: Arc<Vec<EmployeeRecord>>,
    version: u64,
}

impl RecordSnapshot {
    /// Store version this snapshot was taken at.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn ids(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.records.iter().map(|record| record.id)
    }

    pub fn to_vec(&self) -> Vec<EmployeeRecord> {
        self.records.as_ref().clone()
    }
}

impl Deref for RecordSnapshot {
    type Target = [EmployeeRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

/// Ordered employee records with id uniqueness enforced.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Arc<Vec<EmployeeRecord>>,
    positions: HashMap<EmployeeId, usize>,
    version: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection.
    ///
    /// Every record is validated before anything is replaced, so a rejected
    /// batch leaves the store exactly as it was.
    pub fn load(&mut self, records: Vec<EmployeeRecord>) -> Result<()> {
        let positions = index_records(&records)?;
        let count = records.len();
        self.records = Arc::new(records);
        self.positions = positions;
        self.bump();
        info!(records = count, version = self.version, "record store loaded");
        Ok(())
    }

    /// Remove a record, returning whether it existed.
    pub fn delete(&mut self, id: EmployeeId) -> bool {
        let Some(position) = self.positions.get(&id).copied() else {
            return false;
        };
        Arc::make_mut(&mut self.records).remove(position);
        self.reindex_from(position);
        self.bump();
        info!(%id, version = self.version, "record deleted");
        true
    }

    /// Merge `patch` into the record with `id` and return the updated record.
    pub fn update(&mut self, id: EmployeeId, patch: &RecordPatch) -> Result<EmployeeRecord> {
        let position = self
            .positions
            .get(&id)
            .copied()
            .ok_or(RosterError::NotFound(id))?;
        let merged = patch.apply_to(&self.records[position])?;
        Arc::make_mut(&mut self.records)[position] = merged.clone();
        self.bump();
        info!(%id, version = self.version, "record updated");
        Ok(merged)
    }

    /// Snapshot of all records in storage order.
    pub fn all(&self) -> RecordSnapshot {
        RecordSnapshot {
            records: Arc::clone(&self.records),
            version: self.version,
        }
    }

    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.positions
            .get(&id)
            .and_then(|&position| self.records.get(position))
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn ids(&self) -> HashSet<EmployeeId> {
        self.positions.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mutation counter; changes after every successful load, delete, or update.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    fn reindex_from(&mut self, start: usize) {
        self.positions.retain(|_, position| *position < start);
        for (offset, record) in self.records[start..].iter().enumerate() {
            self.positions.insert(record.id, start + offset);
        }
    }
}

fn index_records(records: &[EmployeeRecord]) -> Result<HashMap<EmployeeId, usize>> {
    let mut positions = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        record.validate()?;
        if positions.insert(record.id, position).is_some() {
            return Err(ValidationError::DuplicateId(record.id).into());
        }
    }
    Ok(positions)
}
