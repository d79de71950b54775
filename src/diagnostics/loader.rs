// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Discovers report files in a directory and parses them into raw records.

use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::record::RawRecord;

/// Result type for loading operations.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading report files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read report directory: {path:?}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Failed to read report: {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Report is not a JSON array of objects: {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The file or directory the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            LoadError::ReadDir { path, .. }
            | LoadError::ReadFile { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Everything read from a report directory.
#[derive(Debug, Default)]
pub struct Dataset {
    /// Number of matching files that were attempted.
    pub files: usize,
    /// Raw records in file-name order, then in-file order.
    pub records: Vec<RawRecord>,
    /// Files that were skipped, in file-name order.
    pub failures: Vec<LoadError>,
}

impl Dataset {
    /// True when no record was loaded from any file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load every report with the given extension directly inside `dir`.
///
/// Files are visited sorted by file name so the record order, and with it the
/// example descriptions picked during aggregation, is reproducible. A file
/// that cannot be read or parsed is logged and skipped.
///
/// # Errors
/// Returns an error only if `dir` itself cannot be listed.
pub fn load_directory(dir: &Path, extension: &str) -> LoadResult<Dataset> {
    let extension = extension.trim_start_matches('.');
    let mut dataset = Dataset::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(LoadError::ReadDir {
                    path: dir.to_path_buf(),
                    source: e,
                })
            }
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                eprintln!(
                    "Skipping directory entry: path={}, error={}",
                    path.display(),
                    describe(&e)
                );
                continue;
            }
        };
        let path = entry.path();
        let matches_extension = path.extension().and_then(OsStr::to_str) == Some(extension);
        if !entry.file_type().is_file() || !matches_extension {
            continue;
        }

        dataset.files += 1;
        match load_file(path) {
            Ok(records) => dataset.records.extend(records),
            Err(e) => {
                eprintln!(
                    "Skipping report: file={}, error={}",
                    path.display(),
                    describe(&e)
                );
                dataset.failures.push(e);
            }
        }
    }
    Ok(dataset)
}

/// Parse one report file into raw records tagged with its package name.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a JSON array of objects.
pub fn load_file(path: &Path) -> LoadResult<Vec<RawRecord>> {
    let package = package_name(path);
    let content = fs::read_to_string(path).map_err(|e| LoadError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let items: Vec<Map<String, Value>> =
        serde_json::from_str(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(items
        .iter()
        .map(|item| RawRecord::from_object(&package, item))
        .collect())
}

/// The package a report belongs to: its file name without the extension.
fn package_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Render an error with its chain of causes on one line.
fn describe(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
