// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Writes the data document and the treemap page to disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::html::render_html;
use super::Report;

/// Result type for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while writing report artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create output directory: {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize report to JSON: {path:?}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write output file: {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the `{records, stats, meta}` JSON document.
///
/// # Errors
/// Returns an error if the report cannot be serialized or the file cannot be written.
pub fn write_data(report: &Report<'_>, dest: &Path) -> ExportResult<()> {
    let mut content = serde_json::to_vec_pretty(report).map_err(|e| ExportError::Serialize {
        path: dest.to_path_buf(),
        source: e,
    })?;
    content.push(b'\n');
    write_atomic(dest, &content)
}

/// Write the self-contained treemap page.
///
/// # Errors
/// Returns an error if the embedded data cannot be serialized or the file cannot be written.
pub fn write_html(report: &Report<'_>, dest: &Path) -> ExportResult<()> {
    let page = render_html(report).map_err(|e| ExportError::Serialize {
        path: dest.to_path_buf(),
        source: e,
    })?;
    write_atomic(dest, page.as_bytes())
}

/// Write `content` to `dest`, creating missing parent directories.
///
/// The content goes to a temporary file next to `dest` that is renamed over it
/// once complete, so `dest` never holds a partial artifact.
fn write_atomic(dest: &Path, content: &[u8]) -> ExportResult<()> {
    let dir = dest
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let write_error = |source: std::io::Error| ExportError::Write {
        path: dest.to_path_buf(),
        source,
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(content).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(write_error)?;
    }
    file.persist(dest).map_err(|e| write_error(e.error))?;
    Ok(())
}
