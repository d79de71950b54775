// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Cross-checks a report's statistics against its hierarchy before anything is written.

use anyhow::{bail, Result};

use super::Report;

/// Validate the report.
///
/// # Errors
/// Returns an error if the report is empty, if the severity counts do not add up
/// to the total, or if any hierarchy weight disagrees with the statistics.
pub fn validate_report(report: &Report<'_>) -> Result<()> {
    let stats = report.stats();
    if stats.total_errors == 0 {
        bail!("Report contains no diagnostics");
    }

    let severity_sum: usize = stats.severity_counts.values().sum();
    if severity_sum != stats.total_errors {
        bail!(
            "Severity counts do not add up: sum={}, total={}",
            severity_sum,
            stats.total_errors
        );
    }

    let root = report.hierarchy();
    if root.weight != stats.total_errors {
        bail!(
            "Hierarchy root weight differs from total: weight={}, total={}",
            root.weight,
            stats.total_errors
        );
    }
    for node in &root.children {
        let Some(severity) = node.severity else {
            bail!("Hierarchy node without severity below root: {}", node.label);
        };
        if node.weight != stats.severity_count(severity) {
            bail!(
                "Hierarchy weight differs for severity {}: weight={}, count={}",
                severity,
                node.weight,
                stats.severity_count(severity)
            );
        }
    }
    let severities: Vec<_> = root.children.iter().filter_map(|n| n.severity).collect();
    if severities != report.existing_severities() {
        bail!(
            "Hierarchy severities {:?} differ from existing severities {:?}",
            severities,
            report.existing_severities()
        );
    }
    if let Some(node) = root.find_inconsistency() {
        bail!(
            "Hierarchy node weight is not the sum of its children: node={}, weight={}",
            node.label,
            node.weight
        );
    }
    Ok(())
}
