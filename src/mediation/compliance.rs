// src/mediation/compliance.rs
//! Compares an observed matrix with its mediation matrix.

use serde::Serialize;

use super::generator::{Mediation, MediationMatrix};
use crate::dsm::DependencyMatrix;
use crate::error::{ArchanError, Result};

/// Why a cell disagrees with its mediation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// A dependency exists where the mediation matrix forbids it.
    Forbidden,
    /// A required dependency is absent. The generator never emits required
    /// cells today, so this only fires for hand-built mediation matrices.
    MissingRequired,
}

/// A single untolerated cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub row: usize,
    pub column: usize,
    pub from: String,
    pub to: String,
    pub observed: u32,
    pub expected: Mediation,
    pub kind: DiscrepancyKind,
}

impl Discrepancy {
    /// One-line description used in criterion messages.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "  Untolerated dependency at {}:{} ({}:{}): {} instead of {}",
            self.row,
            self.column,
            self.from,
            self.to,
            self.observed,
            self.expected.value()
        )
    }
}

/// Outcome of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    pub discrepancies: Vec<Discrepancy>,
}

impl ComplianceReport {
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.discrepancies.is_empty()
    }

    /// Newline-joined discrepancy descriptions, empty when compliant.
    #[must_use]
    pub fn message(&self) -> String {
        self.discrepancies
            .iter()
            .map(Discrepancy::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Diffs `dsm` against `mediation`.
///
/// # Errors
/// Returns `DimensionMismatch` if the two matrices differ in shape.
pub fn compare(dsm: &DependencyMatrix, mediation: &MediationMatrix) -> Result<ComplianceReport> {
    check_dimensions(dsm, mediation)?;

    let mut report = ComplianceReport::default();
    for (i, row) in mediation.rows().iter().enumerate() {
        for (j, expected) in row.iter().enumerate() {
            let observed = dsm.weight(i, j);
            if let Some(kind) = classify(*expected, observed) {
                report.discrepancies.push(Discrepancy {
                    row: i,
                    column: j,
                    from: dsm.entity(i).to_string(),
                    to: dsm.entity(j).to_string(),
                    observed,
                    expected: *expected,
                    kind,
                });
            }
        }
    }
    Ok(report)
}

fn classify(expected: Mediation, observed: u32) -> Option<DiscrepancyKind> {
    match expected {
        Mediation::DontCare => None,
        Mediation::Forbidden if observed > 0 => Some(DiscrepancyKind::Forbidden),
        Mediation::Required if observed < 1 => Some(DiscrepancyKind::MissingRequired),
        Mediation::Forbidden | Mediation::Required => None,
    }
}

fn check_dimensions(dsm: &DependencyMatrix, mediation: &MediationMatrix) -> Result<()> {
    let size = dsm.size();
    let mediation_rows = mediation.row_count();
    let ragged = mediation.rows().iter().find(|r| r.len() != size);
    if mediation_rows == size && ragged.is_none() {
        return Ok(());
    }
    Err(ArchanError::DimensionMismatch {
        observed_rows: size,
        observed_cols: size,
        mediation_rows,
        mediation_cols: ragged.or_else(|| mediation.rows().first()).map_or(0, Vec::len),
    })
}
