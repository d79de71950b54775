// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Groups normalized records into counted `(severity, check, package)` buckets.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::diagnostics::{DiagnosticRecord, Severity};

/// Maximum number of distinct descriptions sampled per bucket.
pub const MAX_EXAMPLES: usize = 5;

/// Count and sampled descriptions for one `(severity, check_name, package)` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedBucket {
    pub severity: Severity,
    pub check_name: String,
    pub package: String,
    pub count: usize,
    /// Distinct descriptions in the order they were first seen.
    #[serde(serialize_with = "serialize_examples")]
    pub examples: Vec<String>,
}

impl AggregatedBucket {
    fn new(record: &DiagnosticRecord) -> Self {
        Self {
            severity: record.severity,
            check_name: record.check_name.clone(),
            package: record.package.clone(),
            count: 0,
            examples: Vec::new(),
        }
    }

    fn add(&mut self, description: &str) {
        self.count += 1;
        if self.examples.len() < MAX_EXAMPLES && !self.examples.iter().any(|e| e == description) {
            self.examples.push(description.to_string());
        }
    }

    /// The examples as a bulleted, `<br>`-separated block for tooltips.
    #[must_use]
    pub fn examples_text(&self) -> String {
        join_examples(&self.examples)
    }
}

fn join_examples(examples: &[String]) -> String {
    examples
        .iter()
        .map(|example| format!("    • {example}"))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn serialize_examples<S: Serializer>(examples: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&join_examples(examples))
}

/// Aggregate records into buckets.
///
/// Records must arrive in load order: the examples kept for a bucket depend on
/// it, the counts do not. Buckets are returned sorted by severity rank, then
/// check name, then package.
#[must_use]
pub fn aggregate(records: &[DiagnosticRecord]) -> Vec<AggregatedBucket> {
    let mut buckets: BTreeMap<(Severity, &str, &str), AggregatedBucket> = BTreeMap::new();
    for record in records {
        buckets
            .entry((record.severity, record.check_name.as_str(), record.package.as_str()))
            .or_insert_with(|| AggregatedBucket::new(record))
            .add(&record.description);
    }
    buckets.into_values().collect()
}
