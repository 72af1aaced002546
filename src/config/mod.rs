// src/config/mod.rs
//! Project configuration loaded from `archan.toml`.

pub mod criteria;

pub use self::criteria::CriteriaConfig;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::criteria::Registry;
use crate::error::{ArchanError, Result};

pub const CONFIG_FILE: &str = "archan.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub criteria: CriteriaConfig,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses TOML content. `path` is only used for error reporting.
    ///
    /// # Errors
    /// Returns `Config` if the content is not valid TOML for this schema.
    pub fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| ArchanError::Config {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Loads an explicitly named config file, or `archan.toml` from `dir` if
    /// none is given. A missing default file yields the defaults.
    ///
    /// # Errors
    /// Returns `Io` if an explicit file cannot be read, `Config` if any file
    /// fails to parse, and validation errors from [`Config::validate`].
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::read(path)?,
            None => {
                let path = dir.join(CONFIG_FILE);
                if path.is_file() {
                    Self::read(&path)?
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Self::new()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ArchanError::Io {
            source,
            path: PathBuf::from(path),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::parse_toml(&content, path)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidFactor` for a zero factor.
    pub fn validate(&self) -> Result<()> {
        self.criteria.validate()
    }

    /// Builds the criterion registry described by this configuration.
    ///
    /// # Errors
    /// See [`CriteriaConfig::build_registry`].
    pub fn registry(&self) -> Result<Registry> {
        self.criteria.build_registry()
    }
}
