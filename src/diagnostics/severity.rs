// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Closed severity taxonomy shared by every pipeline stage.

use serde::Serialize;
use std::fmt;

/// Ranked urgency of a diagnostic.
///
/// The declaration order is the canonical display order, so the derived `Ord`
/// sorts `Blocker` first and the `Unknown` sentinel last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
    Unknown,
}

impl Severity {
    /// All severities in canonical order.
    pub const ALL: [Severity; 6] = [
        Severity::Blocker,
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Info,
        Severity::Unknown,
    ];

    /// Parse a severity name.
    ///
    /// Surrounding whitespace and ASCII case are ignored. Anything outside the
    /// taxonomy maps to [`Severity::Unknown`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(value))
            .unwrap_or(Severity::Unknown)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Blocker => "blocker",
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
            Severity::Info => "info",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Severity::parse("blocker"), Severity::Blocker);
        assert_eq!(Severity::parse("critical"), Severity::Critical);
        assert_eq!(Severity::parse("major"), Severity::Major);
        assert_eq!(Severity::parse("minor"), Severity::Minor);
        assert_eq!(Severity::parse("info"), Severity::Info);
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(Severity::parse(" Major "), Severity::Major);
        assert_eq!(Severity::parse("INFO"), Severity::Info);
        assert_eq!(Severity::parse("Unknown"), Severity::Unknown);
    }

    #[test]
    fn test_parse_unrecognized_is_unknown() {
        assert_eq!(Severity::parse("warning"), Severity::Unknown);
        assert_eq!(Severity::parse(""), Severity::Unknown);
    }

    #[test]
    fn test_canonical_order() {
        let mut shuffled = vec![
            Severity::Unknown,
            Severity::Minor,
            Severity::Blocker,
            Severity::Info,
            Severity::Major,
            Severity::Critical,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Severity::ALL.to_vec());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Unknown).unwrap(),
            "\"unknown\""
        );
        assert_eq!(Severity::Critical.to_string(), "critical");
    }
}
