//! Session facade tying the store, query engine, selection, and aggregation
//! together.
//!
//! Query results and the dashboard summary are cached against the store
//! version they were computed from. Any successful mutation bumps the
//! version, so the next read recomputes.

use std::collections::BTreeSet;

use tracing::{debug, info_span};

use roster_model::{
    AggregateSummary, EmployeeId, EmployeeRecord, PageRequest, QueryResult, QuerySpec,
    RecordPatch, Result, RosterOptions,
};

use crate::aggregate::summarize;
use crate::query::QueryEngine;
use crate::selection::SelectionTracker;
use crate::store::{RecordSnapshot, RecordStore};

#[derive(Debug, Clone)]
struct CachedView {
    version: u64,
    spec: QuerySpec,
    result: QueryResult,
}

#[derive(Debug, Clone)]
struct CachedSummary {
    version: u64,
    summary: AggregateSummary,
}

/// One table-and-dashboard session over an in-memory record set.
#[derive(Debug, Default)]
pub struct Roster {
    options: RosterOptions,
    store: RecordStore,
    engine: QueryEngine,
    selection: SelectionTracker,
    query: QuerySpec,
    view_cache: Option<CachedView>,
    summary_cache: Option<CachedSummary>,
}

impl Roster {
    /// Fails with [`roster_model::QueryError::ZeroPageSize`] when `options.page_size` is zero.
    pub fn new(options: RosterOptions) -> Result<Self> {
        options.validate()?;
        let query = QuerySpec::new().with_page(PageRequest::first(options.page_size)?);
        Ok(Self {
            options,
            store: RecordStore::new(),
            engine: QueryEngine::new(&options),
            selection: SelectionTracker::new(),
            query,
            view_cache: None,
            summary_cache: None,
        })
    }

    pub fn options(&self) -> &RosterOptions {
        &self.options
    }

    /// Replace all records. On failure nothing changes.
    pub fn load(&mut self, records: Vec<EmployeeRecord>) -> Result<()> {
        let _span = info_span!("load", records = records.len()).entered();
        self.store.load(records)
    }

    pub fn delete(&mut self, id: EmployeeId) -> bool {
        self.store.delete(id)
    }

    pub fn update(&mut self, id: EmployeeId, patch: &RecordPatch) -> Result<EmployeeRecord> {
        self.store.update(id, patch)
    }

    /// Make `spec` the active query.
    pub fn set_query(&mut self, spec: QuerySpec) {
        self.query = spec;
    }

    pub fn query(&self) -> &QuerySpec {
        &self.query
    }

    /// Reset search, filters, and sort; the selection is left as is.
    pub fn clear_query(&mut self) {
        self.query = self.query.cleared();
    }

    /// Current page of the active query.
    pub fn view(&mut self) -> QueryResult {
        let version = self.store.version();
        if let Some(cached) = &self.view_cache
            && cached.version == version
            && cached.spec == self.query
        {
            debug!(version, "query cache hit");
            return cached.result.clone();
        }
        debug!(version, "query cache miss");
        let result = self.engine.evaluate(&self.store.all(), &self.query);
        self.view_cache = Some(CachedView {
            version,
            spec: self.query.clone(),
            result: result.clone(),
        });
        result
    }

    /// Evaluate an arbitrary spec without changing the active query.
    pub fn evaluate(&self, spec: &QuerySpec) -> QueryResult {
        self.engine.evaluate(&self.store.all(), spec)
    }

    /// Dashboard summary over every record, regardless of the active query.
    pub fn summary(&mut self) -> AggregateSummary {
        let version = self.store.version();
        if let Some(cached) = &self.summary_cache
            && cached.version == version
        {
            return cached.summary.clone();
        }
        let summary = summarize(&self.store.all());
        debug!(version, total = summary.total_count, "summary recomputed");
        self.summary_cache = Some(CachedSummary {
            version,
            summary: summary.clone(),
        });
        summary
    }

    pub fn records(&self) -> RecordSnapshot {
        self.store.all()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionTracker {
        &mut self.selection
    }

    /// Selected ids that still exist.
    pub fn reconciled_selection(&self) -> BTreeSet<EmployeeId> {
        self.selection.reconcile(&self.store.all())
    }

    /// Selected records in store order, skipping ids that no longer exist.
    pub fn selected_records(&self) -> Vec<EmployeeRecord> {
        self.store
            .all()
            .iter()
            .filter(|record| self.selection.contains(record.id))
            .cloned()
            .collect()
    }

    pub fn version(&self) -> u64 {
        self.store.version()
    }
}
