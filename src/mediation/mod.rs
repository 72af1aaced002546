// src/mediation/mod.rs
//! Complete mediation: the expected dependency matrix and its comparison
//! with the observed one.

pub mod compliance;
pub mod generator;

pub use compliance::{compare, ComplianceReport, Discrepancy, DiscrepancyKind};
pub use generator::{generate, Mediation, MediationMatrix};

use crate::dsm::DependencyMatrix;
use crate::error::Result;

/// Generates the mediation matrix of `dsm` and compares the two.
///
/// # Errors
/// Propagates configuration errors from the comparison.
pub fn check(dsm: &DependencyMatrix) -> Result<ComplianceReport> {
    compare(dsm, &generate(dsm))
}
