// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Formats and prints report summaries to the console.

use comfy_table::{Cell, CellAlignment, Table};

use super::hierarchy::HierarchyNode;
use super::utils::{format_count, format_share};
use super::Report;

/// Number of check names listed in the top checks table.
const TOP_CHECKS: usize = 10;

/// Summarize the report to the console.
///
/// Prints the overall totals, the severity breakdown in canonical order and the
/// most frequent check names.
pub fn summarize_report(report: &Report<'_>) {
    let hierarchy = report.hierarchy();

    println!("{}\n", overview_table(report));
    println!("{}\n", severity_table(report));
    println!("{}", top_checks_table(report, &hierarchy));
}

/// Create a table with the default preset styling.
fn default_table_preset() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL_CONDENSED)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| Cell::new(title).add_attribute(comfy_table::Attribute::Bold))
        .collect()
}

fn count_cell(count: usize) -> Cell {
    Cell::new(format_count(count)).set_alignment(CellAlignment::Right)
}

/// Create a table with the overall totals.
fn overview_table(report: &Report) -> Table {
    let stats = report.stats();
    let mut table = default_table_preset();
    table
        .set_header(header(&["Summary", "Count"]))
        .add_row(vec![Cell::new("Total errors"), count_cell(stats.total_errors)])
        .add_row(vec![Cell::new("Packages"), count_cell(stats.unique_packages)])
        .add_row(vec![
            Cell::new("Error types"),
            count_cell(stats.unique_check_names),
        ]);
    table
}

/// Create a table showing the count and share of each severity present.
fn severity_table(report: &Report) -> Table {
    let stats = report.stats();
    let mut table = default_table_preset();
    table.set_header(header(&["Severity", "Count", "Share"]));
    for severity in report.existing_severities() {
        let style = report.table().style(*severity);
        let share = stats
            .severity_share(*severity)
            .map(format_share)
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(format!("{} {}", style.icon, style.label)),
            count_cell(stats.severity_count(*severity)),
            Cell::new(share).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(comfy_table::Attribute::Bold),
        count_cell(stats.total_errors).add_attribute(comfy_table::Attribute::Bold),
        Cell::new(""),
    ]);
    table
}

/// Create a table with the most frequent `(severity, check)` pairs.
fn top_checks_table(report: &Report, hierarchy: &HierarchyNode) -> Table {
    let mut checks: Vec<&HierarchyNode> = hierarchy
        .children
        .iter()
        .flat_map(|severity| severity.children.iter())
        .collect();
    // Stable sort keeps the canonical severity order between equal weights.
    checks.sort_by(|a, b| b.weight.cmp(&a.weight));

    let mut table = default_table_preset();
    table.set_header(header(&["Check", "Severity", "Packages", "Count"]));
    for check in checks.into_iter().take(TOP_CHECKS) {
        let severity = check
            .severity
            .map(|severity| report.table().style(severity).label)
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&check.label),
            Cell::new(severity),
            count_cell(check.children.len()),
            count_cell(check.weight),
        ]);
    }
    table
}
