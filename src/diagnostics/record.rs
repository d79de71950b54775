// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Raw and normalized diagnostic records.

use serde_json::{Map, Value};

use super::severity::Severity;

/// Check name used when a record carries none.
pub const UNKNOWN_CHECK_NAME: &str = "unknown";
/// Description used when a record carries none.
pub const MISSING_DESCRIPTION: &str = "No description";

/// A diagnostic as found in a report file.
///
/// Every field except `package` may be absent. A field that is present but not
/// a JSON string is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub package: String,
    pub check_name: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
}

impl RawRecord {
    /// Build a raw record from one element of a report array.
    #[must_use]
    pub fn from_object(package: &str, object: &Map<String, Value>) -> Self {
        Self {
            package: package.to_string(),
            check_name: string_field(object, "check_name"),
            severity: string_field(object, "severity"),
            description: string_field(object, "description"),
        }
    }

    /// Fill absent fields with their defaults.
    #[must_use]
    pub fn normalize(self) -> DiagnosticRecord {
        DiagnosticRecord {
            package: self.package,
            check_name: self
                .check_name
                .unwrap_or_else(|| UNKNOWN_CHECK_NAME.to_string()),
            severity: self
                .severity
                .as_deref()
                .map_or(Severity::Unknown, Severity::parse),
            description: self
                .description
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
        }
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

/// A diagnostic with every field resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub package: String,
    pub check_name: String,
    pub severity: Severity,
    pub description: String,
}

impl From<DiagnosticRecord> for RawRecord {
    fn from(record: DiagnosticRecord) -> Self {
        Self {
            package: record.package,
            check_name: Some(record.check_name),
            severity: Some(record.severity.as_str().to_string()),
            description: Some(record.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        match value {
            Value::Object(object) => RawRecord::from_object("pkg", &object),
            _ => panic!("test input must be an object"),
        }
    }

    #[test]
    fn test_complete_record_is_kept() {
        let record = raw(json!({
            "check_name": "E501",
            "severity": "minor",
            "description": "line too long",
        }))
        .normalize();
        assert_eq!(
            record,
            DiagnosticRecord {
                package: "pkg".to_string(),
                check_name: "E501".to_string(),
                severity: Severity::Minor,
                description: "line too long".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let record = raw(json!({})).normalize();
        assert_eq!(record.check_name, "unknown");
        assert_eq!(record.severity, Severity::Unknown);
        assert_eq!(record.description, "No description");
    }

    #[test]
    fn test_unrecognized_severity_is_unknown() {
        let record = raw(json!({"severity": "warning"})).normalize();
        assert_eq!(record.severity, Severity::Unknown);
    }

    #[test]
    fn test_non_string_fields_are_absent() {
        let record = raw(json!({
            "check_name": 42,
            "severity": null,
            "description": ["a", "b"],
        }));
        assert_eq!(record.check_name, None);
        assert_eq!(record.severity, None);
        assert_eq!(record.description, None);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let record = raw(json!({"check_name": "F401", "line": 12})).normalize();
        assert_eq!(record.check_name, "F401");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for value in [
            json!({}),
            json!({"severity": "MAJOR", "check_name": "X"}),
            json!({"severity": "bogus", "description": ""}),
        ] {
            let once = raw(value).normalize();
            let twice = RawRecord::from(once.clone()).normalize();
            assert_eq!(once, twice);
        }
    }
}
