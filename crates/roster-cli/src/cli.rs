//! CLI argument definitions for the roster tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_cli::clauses::QueryClauses;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Employee roster - filter, sort and summarize employee records",
    long_about = "Browse an employee roster stored as a JSON array.\n\n\
                  Lists pages of the employee table with search, column filters and sorting,\n\
                  prints dashboard figures, and applies inline edits and deletes in memory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow employee names and salaries in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML file with roster options (page_size, filter_match).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one page of the employee table.
    List(ListArgs),

    /// Print the dashboard: headline cards and breakdowns.
    Summary(SummaryArgs),

    /// Apply an inline edit to one employee.
    Edit(EditArgs),

    /// Delete employees by id.
    Delete(DeleteArgs),

    /// List the queryable columns.
    Columns,
}

#[derive(Args)]
pub struct ListArgs {
    /// JSON file containing an array of employee records.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Search a single column, e.g. `name=ali`.
    #[arg(long = "search", value_name = "COLUMN=TEXT")]
    pub search: Option<String>,

    /// Accept only listed values for a column, e.g. `department=HR,Design`.
    #[arg(long = "filter", value_name = "COLUMN=V1,V2")]
    pub filters: Vec<String>,

    /// Sort by a column, e.g. `salary:desc`.
    #[arg(long = "sort", value_name = "COLUMN[:asc|desc]")]
    pub sort: Option<String>,

    /// Zero-based page index.
    #[arg(long = "page", default_value_t = 0, allow_negative_numbers = true)]
    pub page: i64,

    /// Rows per page (defaults to the configured page size).
    #[arg(long = "page-size", allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Check these employee ids, e.g. `1,4,7`.
    #[arg(long = "select", value_name = "ID,...")]
    pub select: Option<String>,
}

impl ListArgs {
    pub fn clauses(&self) -> QueryClauses {
        QueryClauses {
            search: self.search.clone(),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[derive(Args)]
pub struct SummaryArgs {
    /// JSON file containing an array of employee records.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print plain text lines instead of tables.
    #[arg(long = "plain")]
    pub plain: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// JSON file containing an array of employee records.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Employee to edit.
    #[arg(long = "id")]
    pub id: u64,

    /// Fields to change as a JSON object, e.g. `{"salary": 120000}`.
    #[arg(long = "set", value_name = "JSON")]
    pub set: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// JSON file containing an array of employee records.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Employees to delete.
    #[arg(long = "id", required = true, num_args = 1..)]
    pub ids: Vec<u64>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
