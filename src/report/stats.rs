// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Summary statistics derived from aggregated buckets.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::aggregate::AggregatedBucket;
use crate::diagnostics::Severity;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total_errors: usize,
    pub unique_packages: usize,
    #[serde(rename = "unique_error_types")]
    pub unique_check_names: usize,
    /// Only severities that occur in the data have an entry.
    pub severity_counts: BTreeMap<Severity, usize>,
}

impl SummaryStats {
    #[must_use]
    pub fn calculate(buckets: &[AggregatedBucket]) -> Self {
        let mut packages = BTreeSet::new();
        let mut check_names = BTreeSet::new();
        let mut stats = buckets
            .iter()
            .fold(SummaryStats::default(), |mut stats, bucket| {
                stats.total_errors += bucket.count;
                *stats.severity_counts.entry(bucket.severity).or_default() += bucket.count;
                packages.insert(bucket.package.as_str());
                check_names.insert(bucket.check_name.as_str());
                stats
            });
        stats.unique_packages = packages.len();
        stats.unique_check_names = check_names.len();
        stats
    }

    /// Severities present in the data, in canonical order.
    #[must_use]
    pub fn existing_severities(&self) -> Vec<Severity> {
        self.severity_counts.keys().copied().collect()
    }

    /// Number of diagnostics with the given severity.
    #[must_use]
    pub fn severity_count(&self, severity: Severity) -> usize {
        self.severity_counts.get(&severity).copied().unwrap_or(0)
    }

    /// Fraction of all diagnostics that have the given severity.
    ///
    /// Returns `None` when there are no diagnostics at all or none of this severity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn severity_share(&self, severity: Severity) -> Option<f64> {
        if self.total_errors == 0 {
            return None;
        }
        self.severity_counts
            .get(&severity)
            .map(|count| *count as f64 / self.total_errors as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(severity: Severity, check: &str, package: &str, count: usize) -> AggregatedBucket {
        AggregatedBucket {
            severity,
            check_name: check.to_string(),
            package: package.to_string(),
            count,
            examples: vec!["d".to_string()],
        }
    }

    fn scenario() -> Vec<AggregatedBucket> {
        vec![
            bucket(Severity::Major, "F401", "pkgA", 1),
            bucket(Severity::Minor, "E501", "pkgA", 2),
            bucket(Severity::Minor, "E501", "pkgB", 1),
        ]
    }

    #[test]
    fn test_scenario_totals() {
        let stats = SummaryStats::calculate(&scenario());
        assert_eq!(stats.total_errors, 4);
        assert_eq!(stats.unique_packages, 2);
        assert_eq!(stats.unique_check_names, 2);
        assert_eq!(
            stats.severity_counts,
            BTreeMap::from([(Severity::Major, 1), (Severity::Minor, 3)])
        );
    }

    #[test]
    fn test_severity_counts_sum_to_total() {
        let stats = SummaryStats::calculate(&[
            bucket(Severity::Blocker, "A", "p1", 7),
            bucket(Severity::Info, "B", "p2", 3),
            bucket(Severity::Unknown, "unknown", "p3", 5),
            bucket(Severity::Info, "A", "p1", 11),
        ]);
        assert_eq!(stats.severity_counts.values().sum::<usize>(), stats.total_errors);
        assert_eq!(stats.total_errors, 26);
    }

    #[test]
    fn test_existing_severities_are_canonical() {
        let stats = SummaryStats::calculate(&[
            bucket(Severity::Unknown, "A", "p", 1),
            bucket(Severity::Critical, "A", "p", 1),
            bucket(Severity::Minor, "A", "p", 1),
        ]);
        assert_eq!(
            stats.existing_severities(),
            vec![Severity::Critical, Severity::Minor, Severity::Unknown]
        );
    }

    #[test]
    fn test_share() {
        let stats = SummaryStats::calculate(&scenario());
        assert_eq!(stats.severity_share(Severity::Minor), Some(0.75));
        assert_eq!(stats.severity_share(Severity::Major), Some(0.25));
        assert_eq!(stats.severity_share(Severity::Blocker), None);
        assert_eq!(stats.severity_count(Severity::Blocker), 0);
    }

    #[test]
    fn test_share_without_data() {
        let stats = SummaryStats::calculate(&[]);
        assert_eq!(stats.total_errors, 0);
        assert_eq!(stats.severity_share(Severity::Unknown), None);
        assert!(stats.existing_severities().is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(SummaryStats::calculate(&scenario())).unwrap();
        assert_eq!(json["unique_error_types"], 2);
        assert_eq!(json["severity_counts"]["minor"], 3);
        assert!(json.get("unique_check_names").is_none());
    }
}
