// src/criteria/economy.rs
//! Economy of mechanism: total coupling stays proportional to system size.

use crate::dsm::{Category, DependencyMatrix};
use crate::error::{ArchanError, Result};

use super::types::Verdict;

/// Parameters for the economy of mechanism check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EconomyConfig {
    /// Allowed dependencies per entity. Default: 2
    pub simplicity_factor: u32,
    /// Edges touching these categories are not counted. Default: framework
    pub excluded: Vec<Category>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            simplicity_factor: 2,
            excluded: vec![Category::Framework],
        }
    }
}

impl EconomyConfig {
    /// # Errors
    /// Returns `InvalidFactor` for a zero simplicity factor.
    pub fn validate(&self) -> Result<()> {
        if self.simplicity_factor == 0 {
            return Err(ArchanError::InvalidFactor { name: "simplicity_factor" });
        }
        Ok(())
    }

    #[must_use]
    pub fn threshold(&self, size: usize) -> usize {
        size * self.simplicity_factor as usize
    }

    fn counts(&self, category: Category) -> bool {
        !self.excluded.contains(&category)
    }
}

/// Counts ordered pairs with a dependency where neither end is excluded.
#[must_use]
pub fn count_dependencies(dsm: &DependencyMatrix, config: &EconomyConfig) -> usize {
    let size = dsm.size();
    (0..size)
        .filter(|&i| config.counts(dsm.category(i)))
        .map(|i| {
            (0..size)
                .filter(|&j| config.counts(dsm.category(j)) && dsm.weight(i, j) > 0)
                .count()
        })
        .sum()
}

/// Passes iff the dependency count stays below N × simplicity factor.
#[must_use]
pub fn check(dsm: &DependencyMatrix, config: &EconomyConfig) -> Verdict {
    let count = count_dependencies(dsm, config);
    let threshold = config.threshold(dsm.size());
    Verdict::from_check(
        count < threshold,
        format!(
            "  Number of dependencies ({count}) >= number of rows ({}) * simplicity factor ({}) = {threshold}",
            dsm.size(),
            config.simplicity_factor
        ),
    )
}
