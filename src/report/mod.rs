// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Report struct and public API for aggregating diagnostics and exporting the results.

mod aggregate;
mod console;
mod export;
mod hierarchy;
mod html;
mod palette;
mod stats;
mod utils;
mod validate;

pub use aggregate::{aggregate, AggregatedBucket, MAX_EXAMPLES};
pub use console::summarize_report;
pub use export::{write_data, write_html, ExportError, ExportResult};
pub use hierarchy::{HierarchyNode, ROOT_LABEL};
pub use html::render_html;
pub use palette::{SeverityStyle, SeverityTable};
pub use stats::SummaryStats;
pub use validate::validate_report;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::diagnostics::{DiagnosticRecord, Severity};

/// Aggregated view of one batch of diagnostics.
///
/// Serializes to the `{records, stats, meta}` data document.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    records: Vec<AggregatedBucket>,
    stats: SummaryStats,
    meta: ReportMeta,
    #[serde(skip)]
    table: &'a SeverityTable,
}

#[derive(Debug, Serialize)]
struct ReportMeta {
    color_map: BTreeMap<Severity, &'static str>,
    severity_info: BTreeMap<Severity, SeverityStyle>,
    existing_severities: Vec<Severity>,
}

impl<'a> Report<'a> {
    /// Create a new report from normalized records in load order.
    #[must_use]
    pub fn new(records: &[DiagnosticRecord], table: &'a SeverityTable) -> Self {
        let buckets = aggregate(records);
        let stats = SummaryStats::calculate(&buckets);
        let meta = ReportMeta {
            color_map: table.color_map(),
            severity_info: table.severity_info(),
            existing_severities: stats.existing_severities(),
        };
        Self {
            records: buckets,
            stats,
            meta,
            table,
        }
    }

    #[must_use]
    pub fn buckets(&self) -> &[AggregatedBucket] {
        &self.records
    }

    #[must_use]
    pub fn stats(&self) -> &SummaryStats {
        &self.stats
    }

    #[must_use]
    pub fn existing_severities(&self) -> &[Severity] {
        &self.meta.existing_severities
    }

    #[must_use]
    pub fn table(&self) -> &SeverityTable {
        self.table
    }

    /// Build the treemap hierarchy for this report.
    #[must_use]
    pub fn hierarchy(&self) -> HierarchyNode {
        HierarchyNode::build(&self.records, &self.meta.existing_severities)
    }
}
