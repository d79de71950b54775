// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Runs the load, normalize and aggregate stages over one report directory.

use std::path::Path;

use crate::diagnostics::{load_directory, normalize_records, LoadError, LoadResult};
use crate::report::{Report, SeverityTable};

/// Result of one pipeline run.
#[derive(Debug)]
pub enum Outcome<'a> {
    /// No record could be loaded; nothing should be written.
    NoData {
        files: usize,
        failures: Vec<LoadError>,
    },
    Report {
        report: Report<'a>,
        failures: Vec<LoadError>,
    },
}

/// Load every report in `dir` and aggregate it.
///
/// Unreadable or malformed files are logged and skipped; they are returned in
/// the outcome alongside the result.
///
/// # Errors
/// Returns an error only if `dir` cannot be listed.
pub fn run<'a>(dir: &Path, extension: &str, table: &'a SeverityTable) -> LoadResult<Outcome<'a>> {
    eprintln!(
        "Loading reports: dir={}, extension={}",
        dir.display(),
        extension
    );
    let dataset = load_directory(dir, extension)?;
    eprintln!(
        "Loading completed: files={}, records={}, skipped={}",
        dataset.files,
        dataset.records.len(),
        dataset.failures.len()
    );

    if dataset.is_empty() {
        return Ok(Outcome::NoData {
            files: dataset.files,
            failures: dataset.failures,
        });
    }

    let records = normalize_records(dataset.records);
    let report = Report::new(&records, table);
    eprintln!(
        "Aggregation completed: buckets={}, total={}",
        report.buckets().len(),
        report.stats().total_errors
    );
    Ok(Outcome::Report {
        report,
        failures: dataset.failures,
    })
}
