//! Configuration options for roster queries.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::query::DEFAULT_PAGE_SIZE;
use crate::FilterMatch;

/// Options controlling how the table view is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterOptions {
    /// Page size used when a query does not choose one.
    pub page_size: usize,

    /// Comparison used by column filters.
    ///
    /// `Prefix` reproduces the table widget's "value starts with the
    /// accepted option" matching.
    pub filter_match: FilterMatch,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            filter_match: FilterMatch::Exact,
        }
    }
}

impl RosterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_filter_match(mut self, filter_match: FilterMatch) -> Self {
        self.filter_match = filter_match;
        self
    }

    /// Reject a zero page size.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page_size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        Ok(())
    }
}
