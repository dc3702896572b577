use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use roster_cli::clauses::parse_ids;
use roster_cli::logging::redact_value;
use roster_cli::render::{
    cards_table, columns_table, department_table, employee_table, footer_line, record_table,
    status_table, summary_lines,
};
use roster_core::Roster;
use roster_ingest::{parse_patch, read_employees_file};
use roster_model::{AggregateSummary, EmployeeId, RosterOptions};

use crate::cli::{DeleteArgs, EditArgs, ListArgs, SummaryArgs};

/// Terminal output settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub ansi: bool,
}

impl Output {
    fn print(self, mut table: Table) {
        if self.ansi {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        println!("{table}");
    }

    fn print_dashboard(self, summary: &AggregateSummary) {
        self.print(cards_table(summary));
        self.print(department_table(summary));
        if !summary.is_empty() {
            self.print(status_table(summary));
        }
    }
}

pub fn run_list(args: &ListArgs, options: RosterOptions, output: Output) -> Result<()> {
    let mut roster = load_roster(&args.file, options)?;
    let spec = args
        .clauses()
        .to_spec(roster.options())
        .context("invalid query")?;
    roster.set_query(spec);
    if let Some(list) = &args.select {
        let ids = parse_ids(list).context("invalid --select")?;
        roster.selection_mut().select(ids);
    }

    let result = roster.view();
    let selected = roster.selection().current();
    output.print(employee_table(&result, &selected, output.ansi));
    println!("{}", footer_line(&result));

    if !selected.is_empty() {
        report_selection(&roster);
    }
    Ok(())
}

/// Resolve the checked ids against the store and list them; this is the
/// input every bulk action receives.
fn report_selection(roster: &Roster) {
    let records = roster.selected_records();
    let stale = roster.selection().len() - records.len();
    if stale > 0 {
        warn!(stale, "selected ids not present in the roster");
    }
    println!("Selected ({}):", records.len());
    for record in &records {
        info!(id = %record.id, name = redact_value(&record.name), "bulk action target");
        println!("  {} {} ({})", record.id, record.name, record.department);
    }
}

pub fn run_summary(args: &SummaryArgs, options: RosterOptions, output: Output) -> Result<()> {
    let mut roster = load_roster(&args.file, options)?;
    let summary = roster.summary();
    if args.plain {
        for line in summary_lines(&summary) {
            println!("{line}");
        }
    } else {
        output.print_dashboard(&summary);
    }
    Ok(())
}

pub fn run_edit(args: &EditArgs, options: RosterOptions, output: Output) -> Result<()> {
    let mut roster = load_roster(&args.file, options)?;
    let patch = parse_patch(&args.set).context("invalid --set")?;
    let id = EmployeeId::new(args.id);
    let updated = roster
        .update(id, &patch)
        .with_context(|| format!("edit employee {id}"))?;
    info!(
        %id,
        salary = redact_value(&roster_model::format_salary(updated.salary)),
        "edited employee"
    );
    output.print(record_table(std::slice::from_ref(&updated)));
    output.print_dashboard(&roster.summary());
    Ok(())
}

pub fn run_delete(args: &DeleteArgs, options: RosterOptions, output: Output) -> Result<()> {
    let mut roster = load_roster(&args.file, options)?;
    for &raw in &args.ids {
        let id = EmployeeId::new(raw);
        if roster.delete(id) {
            println!("Deleted employee {id}");
        } else {
            println!("Employee {id} not found");
        }
    }
    output.print_dashboard(&roster.summary());
    Ok(())
}

pub fn run_columns(output: Output) -> Result<()> {
    output.print(columns_table());
    Ok(())
}

fn load_roster(path: &Path, options: RosterOptions) -> Result<Roster> {
    let span = info_span!("roster_file", path = %path.display());
    let _guard = span.enter();
    let records = read_employees_file(path)
        .with_context(|| format!("read employees from {}", path.display()))?;
    let mut roster = Roster::new(options).context("invalid options")?;
    roster.load(records).context("load employees")?;
    Ok(roster)
}
