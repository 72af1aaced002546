// src/criteria/common.rs
//! Least common mechanism: no single non-hub entity is depended upon by too
//! many others.

use crate::dsm::{Category, DependencyMatrix};
use crate::error::{ArchanError, Result};

use super::types::Verdict;

/// Parameters for the least common mechanism check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonMechanismConfig {
    /// Maximum fan-in is N divided by this factor. Default: 5
    pub independence_factor: u32,
}

impl Default for CommonMechanismConfig {
    fn default() -> Self {
        Self { independence_factor: 5 }
    }
}

impl CommonMechanismConfig {
    /// # Errors
    /// Returns `InvalidFactor` for a zero independence factor.
    pub fn validate(&self) -> Result<()> {
        if self.independence_factor == 0 {
            return Err(ArchanError::InvalidFactor { name: "independence_factor" });
        }
        Ok(())
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn threshold(&self, size: usize) -> f64 {
        size as f64 / f64::from(self.independence_factor)
    }
}

/// Fan-in of every entity, ignoring edges that touch the framework.
///
/// Self-dependencies count. Brokers and app libs are expected hubs and
/// always report zero.
#[must_use]
pub fn in_degrees(dsm: &DependencyMatrix) -> Vec<usize> {
    let size = dsm.size();
    (0..size)
        .map(|j| {
            let target = dsm.category(j);
            if target == Category::Framework || target.is_hub() {
                return 0;
            }
            (0..size)
                .filter(|&i| dsm.category(i) != Category::Framework && dsm.weight(i, j) > 0)
                .count()
        })
        .collect()
}

/// Passes iff the largest fan-in is at most N / independence factor.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn check(dsm: &DependencyMatrix, config: &CommonMechanismConfig) -> Verdict {
    let degrees = in_degrees(dsm);
    let threshold = config.threshold(dsm.size());

    let Some((index, max)) = busiest(&degrees) else {
        return Verdict::passed();
    };
    if max as f64 <= threshold {
        return Verdict::passed();
    }
    Verdict::failed(format!(
        "  Dependencies to {} ({max}) > matrix size ({}) / independence factor ({}) = {threshold}",
        dsm.entity(index),
        dsm.size(),
        config.independence_factor
    ))
}

/// First entity holding the maximum fan-in.
fn busiest(degrees: &[usize]) -> Option<(usize, usize)> {
    degrees
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, d)| match best {
            Some((_, m)) if m >= d => best,
            _ => Some((i, d)),
        })
}
