// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "diagnostic_treemap")]
#[command(version)]
#[command(about = "Aggregates per-package diagnostic reports into a severity treemap")]
pub(crate) struct Args {
    /// Directory containing one `<package>.<extension>` report per package.
    #[arg(long, default_value = "ty_outputs")]
    pub input_dir: PathBuf,

    /// Extension of the report files to load.
    #[arg(long, default_value = "json")]
    pub extension: String,

    /// Path to write the aggregated data in JSON format.
    #[arg(long, default_value = "visualizer/data.json")]
    pub data_output: PathBuf,

    /// Path to write the treemap page.
    #[arg(long, default_value = "output/index.html")]
    pub html_output: PathBuf,

    /// Only write the JSON data, skip the treemap page.
    #[arg(long)]
    pub no_html: bool,
}
