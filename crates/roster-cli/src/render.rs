//! Terminal rendering of query pages and the dashboard.

use std::collections::BTreeSet;
use std::ops::Range;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{AggregateSummary, Column, EmployeeId, EmployeeRecord, QueryResult};

const REVERSE_ON: &str = "\x1b[7m";
const REVERSE_OFF: &str = "\x1b[27m";

/// Byte ranges of case-insensitive, non-overlapping occurrences of `needle` in `text`.
pub fn match_ranges(text: &str, needle: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let mut ranges = Vec::new();
    let mut cursor = 0;
    for (start, _) in text.char_indices() {
        if start < cursor {
            continue;
        }
        if let Some(len) = match_len(&text[start..], &needle) {
            ranges.push(start..start + len);
            cursor = start + len;
        }
    }
    ranges
}

fn match_len(text: &str, needle: &[char]) -> Option<usize> {
    let mut expected = needle.iter().peekable();
    for (offset, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            if expected.next() != Some(&lower) {
                return None;
            }
        }
        if expected.peek().is_none() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

/// Mark matches of `needle` in `text`: reverse video with ANSI, brackets without.
pub fn highlight(text: &str, needle: &str, ansi: bool) -> String {
    let (open, close) = if ansi {
        (REVERSE_ON, REVERSE_OFF)
    } else {
        ("[", "]")
    };
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for range in match_ranges(text, needle) {
        out.push_str(&text[last..range.start]);
        out.push_str(open);
        out.push_str(&text[range.clone()]);
        out.push_str(close);
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}

/// The current page as a table, with the searched column highlighted and
/// selected rows checked.
pub fn employee_table(result: &QueryResult, selected: &BTreeSet<EmployeeId>, ansi: bool) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(Column::ALL.iter().map(|column| header_cell(column.title())));
    table.set_header(header);
    apply_table_style(&mut table);
    align_numeric_columns(&mut table, 1);

    for record in &result.rows {
        let mut row = vec![selection_cell(selected.contains(&record.id))];
        row.extend(Column::ALL.iter().map(|&column| {
            let text = record.field_text(column);
            if result.highlighted_column == Some(column) {
                Cell::new(highlight(&text, &result.highlighted_text, ansi))
                    .add_attribute(Attribute::Bold)
            } else if column == Column::Status {
                status_cell(record)
            } else {
                Cell::new(text)
            }
        }));
        table.add_row(row);
    }
    table
}

/// Plain table of full records, used after edits.
pub fn record_table(records: &[EmployeeRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(
        Column::ALL
            .iter()
            .map(|column| header_cell(column.title()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    align_numeric_columns(&mut table, 0);
    for record in records {
        table.add_row(
            Column::ALL
                .iter()
                .map(|&column| match column {
                    Column::Status => status_cell(record),
                    _ => Cell::new(record.field_text(column)),
                })
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// One-line description of where the page sits in the matched set.
pub fn footer_line(result: &QueryResult) -> String {
    let page_count = result.page_count();
    let page = result.page.index() + 1;
    if result.total_matched == 0 {
        return "No employees match the current query.".to_string();
    }
    if result.is_empty() {
        return format!(
            "Page {page} is past the end: {} matched across {page_count} page(s).",
            result.total_matched
        );
    }
    let (start, end) = result.page.bounds(result.total_matched);
    format!(
        "Rows {}-{end} of {} matched, page {page} of {page_count}.",
        start + 1,
        result.total_matched
    )
}

/// The four dashboard cards.
pub fn cards_table(summary: &AggregateSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total Employees"),
        header_cell("Departments"),
        header_cell("Average Salary"),
        header_cell("Active Employees"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    table.add_row(vec![
        Cell::new(summary.total_count).add_attribute(Attribute::Bold),
        Cell::new(summary.distinct_department_count).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", summary.average_salary)).add_attribute(Attribute::Bold),
        Cell::new(summary.active_count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Headcount and payroll per department, with a total row.
pub fn department_table(summary: &AggregateSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Department"),
        header_cell("Employees"),
        header_cell("Salary"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for totals in summary.departments() {
        table.add_row(vec![
            Cell::new(totals.department),
            Cell::new(totals.count),
            Cell::new(roster_model::format_salary(totals.salary)),
        ]);
    }
    if summary.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell(0), dim_cell(0)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total_count).add_attribute(Attribute::Bold),
        Cell::new(roster_model::format_salary(summary.total_salary)).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Status distribution with percentages.
pub fn status_table(summary: &AggregateSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Employees"),
        header_cell("Share"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for share in summary.status_share() {
        table.add_row(vec![
            Cell::new(share.status).fg(status_color(share.status.is_active())),
            Cell::new(share.count),
            Cell::new(format!("{:.1}%", share.fraction * 100.0)),
        ]);
    }
    table
}

/// Dashboard as plain text lines.
pub fn summary_lines(summary: &AggregateSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Total Employees: {}", summary.total_count),
        format!("Departments: {}", summary.distinct_department_count),
        format!("Average Salary: {:.2}", summary.average_salary),
        format!("Active Employees: {}", summary.active_count),
    ];
    lines.extend(summary.departments().into_iter().map(|totals| {
        format!(
            "Department {}: {} employee(s), salary {}",
            totals.department,
            totals.count,
            roster_model::format_salary(totals.salary)
        )
    }));
    lines.extend(summary.status_share().into_iter().map(|share| {
        format!(
            "Status {}: {} ({:.1}%)",
            share.status,
            share.count,
            share.fraction * 100.0
        )
    }));
    lines
}

/// Queryable columns with their kinds.
pub fn columns_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Title"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table);
    for column in Column::ALL {
        let kind = if column.is_numeric() {
            "numeric"
        } else {
            "text"
        };
        table.add_row(vec![
            Cell::new(column.as_str()),
            Cell::new(column.title()),
            dim_cell(kind),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_numeric_columns(table: &mut Table, offset: usize) {
    for (index, column) in Column::ALL.iter().enumerate() {
        if column.is_numeric() {
            align_column(table, index + offset, CellAlignment::Right);
        }
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn selection_cell(selected: bool) -> Cell {
    if selected {
        Cell::new("[x]")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("[ ]")
    }
}

fn status_cell(record: &EmployeeRecord) -> Cell {
    Cell::new(record.status).fg(status_color(record.status.is_active()))
}

fn status_color(active: bool) -> Color {
    if active { Color::Green } else { Color::Red }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
