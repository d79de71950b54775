// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Renders the report as a self-contained treemap page.
//!
//! The page embeds the flattened hierarchy as JSON and only loads the charting
//! runtime from its CDN. All counts and the severity order come from the
//! report and its hierarchy.

use serde::Serialize;
use std::fmt::Write;

use super::hierarchy::HierarchyNode;
use super::utils::{escape_html, format_count, format_share};
use super::Report;

const PLOTLY_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const ROOT_COLOR: &str = "#F5F5F5";
const HOVER_TEMPLATE: &str = "<b>%{label}</b><br><br><b>Count:</b> %{value}<br><b>Severity:</b> %{customdata[0]}<br><b>Examples:</b><br>%{customdata[1]}<extra></extra>";

/// Parallel arrays in the layout a treemap trace expects.
#[derive(Debug, Default, Serialize)]
struct TreemapTrace {
    ids: Vec<String>,
    labels: Vec<String>,
    parents: Vec<String>,
    values: Vec<usize>,
    colors: Vec<&'static str>,
    /// `[severity label, examples]` per node.
    customdata: Vec<[String; 2]>,
}

impl TreemapTrace {
    fn new(report: &Report<'_>, root: &HierarchyNode) -> Self {
        let table = report.table();
        let mut trace = Self::default();
        root.walk(&mut |node, parent| {
            trace.ids.push(node.id.clone());
            trace.labels.push(escape_html(&node.label));
            trace
                .parents
                .push(parent.map(|p| p.id.clone()).unwrap_or_default());
            trace.values.push(node.weight);
            trace
                .colors
                .push(node.severity.map_or(ROOT_COLOR, |s| table.color(s)));
            let severity = node
                .severity
                .map(|s| table.style(s).label.to_string())
                .unwrap_or_default();
            let examples = node
                .examples
                .iter()
                .map(|example| format!("    • {}", escape_html(example)))
                .collect::<Vec<_>>()
                .join("<br>");
            trace.customdata.push([severity, examples]);
        });
        trace
    }
}

/// Serialize `value` so it can be embedded inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

/// Render the report as an HTML page.
///
/// # Errors
/// Returns an error if the embedded chart data cannot be serialized.
pub fn render_html(report: &Report<'_>) -> serde_json::Result<String> {
    let root = report.hierarchy();
    let trace = script_json(&TreemapTrace::new(report, &root))?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Error Frequency Treemap</title>
    <script src="{plotly}"></script>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Error Frequency Treemap</h1>
            <p class="meta">Size = frequency, color = severity. Click a tile to drill down.</p>
        </header>
        {summary}
        {legend}
        <div id="treemap"></div>
    </div>
    <script>
const trace = {trace};
Plotly.newPlot("treemap", [{{
    type: "treemap",
    ids: trace.ids,
    labels: trace.labels,
    parents: trace.parents,
    values: trace.values,
    branchvalues: "total",
    marker: {{ colors: trace.colors }},
    customdata: trace.customdata,
    hovertemplate: {hover}
}}], {{
    margin: {{ t: 25, l: 25, r: 25, b: 25 }}
}}, {{ responsive: true }});
    </script>
</body>
</html>
"#,
        plotly = PLOTLY_URL,
        css = inline_css(),
        summary = render_summary(report),
        legend = render_legend(report),
        hover = script_json(&HOVER_TEMPLATE)?,
    ))
}

/// Summary cards: total, one per severity present, packages and error types.
fn render_summary(report: &Report<'_>) -> String {
    let stats = report.stats();
    let mut cards = String::new();
    let _ = write!(
        cards,
        r#"<div class="card"><h3>Total Errors</h3><div class="value">{}</div></div>"#,
        format_count(stats.total_errors)
    );
    for severity in report.existing_severities() {
        let style = report.table().style(*severity);
        let share = stats
            .severity_share(*severity)
            .map(format_share)
            .unwrap_or_default();
        let _ = write!(
            cards,
            r#"<div class="card" style="border-left-color: {color}"><h3>{icon} {label}</h3><div class="value">{count}</div><div class="share">{share}</div></div>"#,
            color = style.color,
            icon = style.icon,
            label = escape_html(style.label),
            count = format_count(stats.severity_count(*severity)),
            share = share,
        );
    }
    let _ = write!(
        cards,
        r#"<div class="card"><h3>Packages</h3><div class="value">{}</div></div><div class="card"><h3>Error Types</h3><div class="value">{}</div></div>"#,
        format_count(stats.unique_packages),
        format_count(stats.unique_check_names)
    );
    format!(r#"<section class="summary">{cards}</section>"#)
}

/// Legend keyed by severity color, only for severities present.
fn render_legend(report: &Report<'_>) -> String {
    let items: String = report
        .existing_severities()
        .iter()
        .map(|severity| {
            let style = report.table().style(*severity);
            format!(
                r#"<li><span class="swatch" style="background: {color}"></span><strong>{icon} {label}</strong> {description}</li>"#,
                color = style.color,
                icon = style.icon,
                label = escape_html(style.label),
                description = escape_html(style.description),
            )
        })
        .collect();
    format!(r#"<ul class="legend">{items}</ul>"#)
}

fn inline_css() -> &'static str {
    r"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; color: #111827; background: #ffffff; }
.container { max-width: 1400px; margin: 0 auto; padding: 2rem; }
header { margin-bottom: 1.5rem; }
header h1 { font-size: 2rem; font-weight: 700; }
header .meta { color: #6b7280; font-size: 0.875rem; }
.summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
.card { background: #f9fafb; padding: 1rem; border-radius: 0.5rem; border-left: 4px solid #3b82f6; }
.card h3 { font-size: 0.875rem; font-weight: 600; color: #6b7280; margin-bottom: 0.25rem; }
.card .value { font-size: 1.5rem; font-weight: 700; }
.card .share { font-size: 0.75rem; color: #6b7280; }
.legend { list-style: none; display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1.5rem; font-size: 0.875rem; }
.legend .swatch { display: inline-block; width: 0.875rem; height: 0.875rem; border-radius: 0.125rem; margin-right: 0.375rem; vertical-align: middle; }
#treemap { width: 100%; height: 75vh; }
"
}
