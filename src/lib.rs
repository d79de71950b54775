// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! A tool for aggregating per-package static-analysis reports into a treemap.
//!
//! This crate provides functionality to:
//! - Load per-package JSON diagnostic reports from a directory in a stable order
//! - Normalize records with missing fields to documented defaults
//! - Aggregate diagnostics into `(severity, check, package)` buckets with examples
//! - Compute summary statistics and the drill-down hierarchy
//! - Export a JSON data document and a self-contained treemap page

pub mod diagnostics;
pub mod pipeline;
pub mod report;

// Re-export key types for convenience
pub use diagnostics::{DiagnosticRecord, RawRecord, Severity};
pub use pipeline::{run, Outcome};
pub use report::{AggregatedBucket, HierarchyNode, Report, SeverityTable, SummaryStats};
