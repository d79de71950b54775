// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Presentation table for severities: color, label, description and icon.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::diagnostics::Severity;

/// How one severity is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Immutable lookup table covering every [`Severity`].
///
/// The colors are consumed by downstream tooling and must not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityTable {
    styles: [SeverityStyle; 6],
}

impl Default for SeverityTable {
    fn default() -> Self {
        Self {
            styles: [
                SeverityStyle {
                    label: "Blocker",
                    color: "#C62828",
                    description: "Critical blocker issues - must be fixed immediately",
                    icon: "🚫",
                },
                SeverityStyle {
                    label: "Critical",
                    color: "#E53935",
                    description: "Critical errors requiring immediate attention",
                    icon: "🔴",
                },
                SeverityStyle {
                    label: "Major",
                    color: "#EF7B7B",
                    description: "Major issues that should be addressed soon",
                    icon: "🟠",
                },
                SeverityStyle {
                    label: "Minor",
                    color: "#FFB74D",
                    description: "Minor issues - recommended fixes",
                    icon: "🟡",
                },
                SeverityStyle {
                    label: "Info",
                    color: "#64B5F6",
                    description: "Informational messages and suggestions",
                    icon: "ℹ️",
                },
                SeverityStyle {
                    label: "Unknown",
                    color: "#9E9E9E",
                    description: "Unclassified or unknown severity",
                    icon: "❓",
                },
            ],
        }
    }
}

impl SeverityTable {
    #[must_use]
    pub fn style(&self, severity: Severity) -> &SeverityStyle {
        // `Severity::ALL` and `styles` share the canonical order.
        let index = Severity::ALL
            .iter()
            .position(|s| *s == severity)
            .unwrap_or(Severity::ALL.len() - 1);
        &self.styles[index]
    }

    #[must_use]
    pub fn color(&self, severity: Severity) -> &'static str {
        self.style(severity).color
    }

    /// Severity to color for every severity.
    #[must_use]
    pub fn color_map(&self) -> BTreeMap<Severity, &'static str> {
        Severity::ALL
            .into_iter()
            .map(|severity| (severity, self.color(severity)))
            .collect()
    }

    /// Severity to full style for every severity.
    #[must_use]
    pub fn severity_info(&self) -> BTreeMap<Severity, SeverityStyle> {
        Severity::ALL
            .into_iter()
            .map(|severity| (severity, *self.style(severity)))
            .collect()
    }
}
