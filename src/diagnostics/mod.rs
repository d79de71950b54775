// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Ingestion side of the pipeline: loading report files and normalizing their records.

mod loader;
mod record;
mod severity;

pub use loader::{load_directory, load_file, Dataset, LoadError, LoadResult};
pub use record::{DiagnosticRecord, RawRecord, MISSING_DESCRIPTION, UNKNOWN_CHECK_NAME};
pub use severity::Severity;

/// Normalize every raw record, keeping their order.
#[must_use]
pub fn normalize_records(records: Vec<RawRecord>) -> Vec<DiagnosticRecord> {
    records.into_iter().map(RawRecord::normalize).collect()
}
