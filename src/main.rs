// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
mod args;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use args::Args;
use diagnostic_treemap::pipeline::{run, Outcome};
use diagnostic_treemap::report::{
    summarize_report, validate_report, write_data, write_html, Report, SeverityTable,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let table = SeverityTable::default();
    let outcome = run(&args.input_dir, &args.extension, &table)
        .with_context(|| format!("Failed to load reports: {}", args.input_dir.display()))?;

    let report = match outcome {
        Outcome::NoData { files, failures } => {
            println!(
                "No data found: {} file(s) read, {} skipped",
                files,
                failures.len()
            );
            return Ok(());
        }
        Outcome::Report { report, .. } => report,
    };

    validate_report(&report)?;
    write_data_file(&report, &args.data_output)?;
    if !args.no_html {
        write_html_file(&report, &args.html_output)?;
    }
    summarize_report(&report);
    Ok(())
}

/// Write the JSON data document.
///
/// # Errors
/// Returns an error if the report cannot be serialized or the file cannot be written.
fn write_data_file(report: &Report<'_>, dest: &Path) -> Result<()> {
    eprintln!("Writing data to file: file={}", dest.display());
    write_data(report, dest)
        .with_context(|| format!("Failed to write data file: {}", dest.display()))
}

fn write_html_file(report: &Report<'_>, dest: &Path) -> Result<()> {
    eprintln!("Writing treemap to file: file={}", dest.display());
    write_html(report, dest)
        .with_context(|| format!("Failed to write treemap page: {}", dest.display()))
}
