//! Parsing for the query clauses accepted by `roster list`.

use roster_model::{
    Column, EmployeeId, PageRequest, QueryError, QuerySpec, RosterOptions, SortSpec,
};

/// Raw query flags as typed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryClauses {
    /// `COLUMN=TEXT`
    pub search: Option<String>,
    /// `COLUMN=V1,V2`, one entry per `--filter`.
    pub filters: Vec<String>,
    /// `COLUMN[:asc|desc]`
    pub sort: Option<String>,
    /// Zero-based page index.
    pub page: i64,
    /// Overrides the configured page size.
    pub page_size: Option<i64>,
}

impl QueryClauses {
    /// Build a validated [`QuerySpec`], falling back to `options` for the page size.
    pub fn to_spec(&self, options: &RosterOptions) -> Result<QuerySpec, QueryError> {
        let size = self
            .page_size
            .unwrap_or_else(|| i64::try_from(options.page_size).unwrap_or(i64::MAX));
        let mut spec = QuerySpec::new().with_page(PageRequest::from_signed(self.page, size)?);

        if let Some(clause) = &self.search {
            let (column, text) = parse_search(clause)?;
            spec = spec.with_search(column, text);
        }
        for clause in &self.filters {
            let (column, values) = parse_filter(clause)?;
            spec = spec.with_filter(column, values);
        }
        if let Some(clause) = &self.sort {
            spec = spec.with_sort(clause.parse::<SortSpec>()?);
        }
        Ok(spec)
    }
}

/// Split `COLUMN=VALUE`, parsing the column.
fn split_clause(clause: &str) -> Result<(Column, &str), QueryError> {
    let Some((column, value)) = clause.split_once('=') else {
        return Err(QueryError::MalformedClause {
            clause: clause.to_string(),
            message: "expected COLUMN=VALUE".to_string(),
        });
    };
    Ok((column.parse()?, value))
}

/// Parse `COLUMN=TEXT`. The text is kept verbatim; an empty text disables search.
pub fn parse_search(clause: &str) -> Result<(Column, String), QueryError> {
    let (column, text) = split_clause(clause)?;
    Ok((column, text.to_string()))
}

/// Parse `COLUMN=V1,V2`. Blank values are dropped, so `COLUMN=` accepts everything.
pub fn parse_filter(clause: &str) -> Result<(Column, Vec<String>), QueryError> {
    let (column, values) = split_clause(clause)?;
    let values = values
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
    Ok((column, values))
}

/// Parse a comma-separated id list such as `1,4,7`.
pub fn parse_ids(list: &str) -> Result<Vec<EmployeeId>, QueryError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<EmployeeId>()
                .map_err(|error| QueryError::MalformedClause {
                    clause: item.to_string(),
                    message: error.to_string(),
                })
        })
        .collect()
}
