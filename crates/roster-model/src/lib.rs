//! Data model for the employee roster: records, query specs, query results,
//! and dashboard summaries.

pub mod enums;
pub mod error;
pub mod ids;
pub mod options;
pub mod query;
pub mod record;
pub mod summary;

pub use enums::{Column, FilterMatch, SortDirection, Status};
pub use error::{QueryError, Result, RosterError, ValidationError};
pub use ids::EmployeeId;
pub use options::RosterOptions;
pub use query::{DEFAULT_PAGE_SIZE, PageRequest, QueryResult, QuerySpec, SortSpec};
pub use record::{EmployeeRecord, RecordPatch, format_salary};
pub use summary::{AggregateSummary, DepartmentTotals, StatusShare};
