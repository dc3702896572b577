//! Query parameters and derived result views.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::{Column, EmployeeRecord, SortDirection};

/// Rows per page used by the employee table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort instruction for a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.direction)
    }
}

impl FromStr for SortSpec {
    type Err = QueryError;

    /// Parse `column` or `column:asc|desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = match s.split_once(':') {
            Some((column, direction)) => (column, direction.parse()?),
            None => (s, SortDirection::Asc),
        };
        Ok(Self {
            column: column.parse()?,
            direction,
        })
    }
}

/// A validated page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPage")]
pub struct PageRequest {
    index: usize,
    size: usize,
}

#[derive(Deserialize)]
struct RawPage {
    index: i64,
    size: i64,
}

impl TryFrom<RawPage> for PageRequest {
    type Error = QueryError;

    fn try_from(raw: RawPage) -> Result<Self, Self::Error> {
        Self::from_signed(raw.index, raw.size)
    }
}

impl PageRequest {
    pub fn new(index: usize, size: usize) -> Result<Self, QueryError> {
        if size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        Ok(Self { index, size })
    }

    /// Build from signed input, rejecting negative bounds.
    pub fn from_signed(index: i64, size: i64) -> Result<Self, QueryError> {
        if index < 0 {
            return Err(QueryError::NegativePageIndex(index));
        }
        if size < 0 {
            return Err(QueryError::NegativePageSize(size));
        }
        let index = usize::try_from(index).map_err(|_| QueryError::NegativePageIndex(index))?;
        let size = usize::try_from(size).map_err(|_| QueryError::NegativePageSize(size))?;
        Self::new(index, size)
    }

    pub fn first(size: usize) -> Result<Self, QueryError> {
        Self::new(0, size)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Half-open row range `[start, end)` this page covers, clamped to `len`.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = self.index.saturating_mul(self.size).min(len);
        let end = start.saturating_add(self.size).min(len);
        (start, end)
    }

    /// Number of pages needed for `total` rows.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Requested table view: column filters, single-column search, sort, page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySpec {
    pub search_text: String,
    pub search_column: Option<Column>,
    pub column_filters: BTreeMap<Column, BTreeSet<String>>,
    pub sort: Option<SortSpec>,
    pub page: PageRequest,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search one column for `text`.
    pub fn with_search(mut self, column: Column, text: impl Into<String>) -> Self {
        self.search_column = Some(column);
        self.search_text = text.into();
        self
    }

    /// Accept only rows whose `column` matches one of `values`.
    ///
    /// Repeated calls for the same column extend its accepted set.
    pub fn with_filter<I, S>(mut self, column: Column, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_filters
            .entry(column)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    /// True when the search stage will constrain rows.
    pub fn search_active(&self) -> bool {
        self.search_column.is_some() && !self.search_text.is_empty()
    }

    /// Drop search, filters and sort, keeping the page size.
    pub fn cleared(&self) -> Self {
        Self {
            page: PageRequest {
                index: 0,
                size: self.page.size,
            },
            ..Self::default()
        }
    }
}

/// One page of query output plus the data the table needs to render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub rows: Vec<EmployeeRecord>,
    pub total_matched: usize,
    pub highlighted_column: Option<Column>,
    pub highlighted_text: String,
    pub page: PageRequest,
}

impl QueryResult {
    pub fn page_count(&self) -> usize {
        self.page.page_count(self.total_matched)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
