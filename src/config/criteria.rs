// src/config/criteria.rs
//! Criteria settings from archan.toml.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::criteria::{CommonMechanismConfig, EconomyConfig, Registry};
use crate::dsm::Category;
use crate::error::Result;

/// The `[criteria]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaConfig {
    /// Economy of mechanism: allowed dependencies per entity. Default: 2
    pub simplicity_factor: u32,
    /// Least common mechanism: N / factor bounds fan-in. Default: 5
    pub independence_factor: u32,
    /// Categories left out of the economy count. Default: ["framework"]
    pub economy_excluded: Vec<Category>,
    /// Codenames reported as IGNORED instead of being checked.
    pub ignore: Vec<String>,
    /// Remediation hint overrides, keyed by codename.
    pub hints: BTreeMap<String, String>,
    /// Description overrides, keyed by codename.
    pub descriptions: BTreeMap<String, String>,
}

impl Default for CriteriaConfig {
    fn default() -> Self {
        let economy = EconomyConfig::default();
        Self {
            simplicity_factor: economy.simplicity_factor,
            independence_factor: CommonMechanismConfig::default().independence_factor,
            economy_excluded: economy.excluded,
            ignore: Vec::new(),
            hints: BTreeMap::new(),
            descriptions: BTreeMap::new(),
        }
    }
}

impl CriteriaConfig {
    /// Rejects factors that would make a threshold meaningless.
    ///
    /// # Errors
    /// Returns `InvalidFactor` for a zero factor.
    pub fn validate(&self) -> Result<()> {
        self.to_economy_config().validate()?;
        self.to_common_config().validate()
    }

    #[must_use]
    pub fn to_economy_config(&self) -> EconomyConfig {
        EconomyConfig {
            simplicity_factor: self.simplicity_factor,
            excluded: self.economy_excluded.clone(),
        }
    }

    #[must_use]
    pub fn to_common_config(&self) -> CommonMechanismConfig {
        CommonMechanismConfig {
            independence_factor: self.independence_factor,
        }
    }

    /// Builds the standard registry with these settings applied.
    ///
    /// # Errors
    /// Returns `InvalidFactor` or `UnknownCriterion` for bad settings.
    pub fn build_registry(&self) -> Result<Registry> {
        self.validate()?;
        let mut builder =
            Registry::standard_builder(self.to_economy_config(), self.to_common_config())?;
        for (codename, hint) in &self.hints {
            builder = builder.hint(codename, hint)?;
        }
        for (codename, description) in &self.descriptions {
            builder = builder.describe(codename, description)?;
        }
        for codename in &self.ignore {
            builder = builder.ignore(codename.as_str());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArchanError;

    #[test]
    fn test_defaults_match_engine() {
        let config = CriteriaConfig::default();
        assert_eq!(config.to_economy_config(), EconomyConfig::default());
        assert_eq!(config.to_common_config(), CommonMechanismConfig::default());
    }

    #[test]
    fn test_zero_factor_rejected() {
        let config = CriteriaConfig {
            independence_factor: 0,
            ..CriteriaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ArchanError::InvalidFactor { name: "independence_factor" })
        ));
        assert!(config.build_registry().is_err());
    }

    #[test]
    fn test_unknown_ignore_rejected() {
        let config = CriteriaConfig {
            ignore: vec!["TYPO".into()],
            ..CriteriaConfig::default()
        };
        assert!(matches!(
            config.build_registry(),
            Err(ArchanError::UnknownCriterion(ref c)) if c == "TYPO"
        ));
    }
}
