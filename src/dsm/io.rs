// src/dsm/io.rs
//! Reads a dependency matrix from a JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use super::matrix::DependencyMatrix;
use crate::error::{ArchanError, Result};

/// Parses a matrix. `path` is only used for error reporting.
///
/// # Errors
/// Returns `Json` if the document is not a valid matrix, including shape and
/// category errors.
pub fn parse_json(content: &str, path: &Path) -> Result<DependencyMatrix> {
    serde_json::from_str(content).map_err(|source| ArchanError::Json {
        source,
        path: path.to_path_buf(),
    })
}

/// Loads a matrix from a JSON file.
///
/// # Errors
/// Returns `Io` if the file cannot be read, otherwise see [`parse_json`].
pub fn load(path: &Path) -> Result<DependencyMatrix> {
    let content = fs::read_to_string(path).map_err(|source| ArchanError::Io {
        source,
        path: PathBuf::from(path),
    })?;
    let dsm = parse_json(&content, path)?;
    tracing::debug!(path = %path.display(), entities = dsm.size(), "loaded dependency matrix");
    Ok(dsm)
}
