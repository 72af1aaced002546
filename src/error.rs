// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors raised by the rule engine.
///
/// Criterion failures are never errors; they travel as data in
/// [`crate::criteria::Verdict`].
#[derive(Debug, Error)]
pub enum ArchanError {
    #[error("invalid category '{0}' (expected framework, core_lib, app_lib, app_module, broker or data)")]
    InvalidCategory(String),

    #[error("matrices are not compliant: {observed_rows}x{observed_cols} observed vs {mediation_rows}x{mediation_cols} mediation")]
    DimensionMismatch {
        observed_rows: usize,
        observed_cols: usize,
        mediation_rows: usize,
        mediation_cols: usize,
    },

    #[error("malformed dependency matrix: {0}")]
    MalformedMatrix(String),

    #[error("{name} must be a positive integer")]
    InvalidFactor { name: &'static str },

    #[error("criterion '{0}' is already registered")]
    DuplicateCodename(String),

    #[error("unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("invalid matrix file {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
}

impl ArchanError {
    /// True for errors caused by user-supplied input rather than the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, ArchanError>;

// Allow `?` on std::io::Error by converting to ArchanError::Io with unknown path.
impl From<std::io::Error> for ArchanError {
    fn from(source: std::io::Error) -> Self {
        ArchanError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
