//! Query evaluation: column filters, single-column search, sort, paginate.
//!
//! Stages run in that fixed order, each on the output of the previous one.
//! Evaluation never touches the record store; it works on whatever slice of
//! records it is handed.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;

use roster_model::{
    Column, EmployeeRecord, FilterMatch, QueryResult, QuerySpec, RosterOptions, SortDirection,
    SortSpec,
};

/// Evaluates [`QuerySpec`]s against a record slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine {
    filter_match: FilterMatch,
}

impl QueryEngine {
    pub fn new(options: &RosterOptions) -> Self {
        Self {
            filter_match: options.filter_match,
        }
    }

    pub fn filter_match(&self) -> FilterMatch {
        self.filter_match
    }

    /// Produce the requested page of `records`.
    ///
    /// `spec` is already validated by construction ([`roster_model::PageRequest`]
    /// cannot hold a zero size, and columns are a closed enum), so evaluation
    /// itself cannot fail.
    pub fn evaluate(&self, records: &[EmployeeRecord], spec: &QuerySpec) -> QueryResult {
        let mut matched: Vec<&EmployeeRecord> = records
            .iter()
            .filter(|record| self.passes_filters(record, spec))
            .collect();

        if spec.search_active()
            && let Some(column) = spec.search_column
        {
            let needle = spec.search_text.to_lowercase();
            matched.retain(|record| {
                record
                    .field_text(column)
                    .to_lowercase()
                    .contains(needle.as_str())
            });
        }

        if let Some(sort) = spec.sort {
            sort_records(&mut matched, sort);
        }

        let total_matched = matched.len();
        let (start, end) = spec.page.bounds(total_matched);
        let rows: Vec<EmployeeRecord> = matched[start..end]
            .iter()
            .map(|record| (*record).clone())
            .collect();

        debug!(
            scanned = records.len(),
            matched = total_matched,
            page = spec.page.index(),
            returned = rows.len(),
            "query evaluated"
        );

        QueryResult {
            rows,
            total_matched,
            highlighted_column: if spec.search_active() {
                spec.search_column
            } else {
                None
            },
            highlighted_text: spec.search_text.clone(),
            page: spec.page,
        }
    }

    fn passes_filters(&self, record: &EmployeeRecord, spec: &QuerySpec) -> bool {
        spec.column_filters
            .iter()
            .filter(|(_, accepted)| !accepted.is_empty())
            .all(|(&column, accepted)| {
                accepts(self.filter_match, accepted, &record.field_text(column))
            })
    }
}

fn accepts(mode: FilterMatch, accepted: &BTreeSet<String>, value: &str) -> bool {
    match mode {
        FilterMatch::Exact => accepted.contains(value),
        FilterMatch::Prefix => accepted.iter().any(|option| value.starts_with(option.as_str())),
    }
}

/// Stable sort; ties keep input order in either direction.
fn sort_records(records: &mut [&EmployeeRecord], sort: SortSpec) {
    records.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort.column);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &EmployeeRecord, b: &EmployeeRecord, column: Column) -> Ordering {
    if column == Column::Id {
        return a.id.cmp(&b.id);
    }
    match (a.field_number(column), b.field_number(column)) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        _ => text_length(&a.field_text(column)).cmp(&text_length(&b.field_text(column))),
    }
}

/// Length in UTF-16 code units, matching how the table widget measures text.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}
