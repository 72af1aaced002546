// src/criteria/criterion.rs
//! A named check and the descriptor that selects its algorithm.

use crate::dsm::DependencyMatrix;
use crate::error::Result;
use crate::mediation;

use super::common::{self, CommonMechanismConfig};
use super::economy::{self, EconomyConfig};
use super::layered;
use super::text;
use super::types::Verdict;

/// Which algorithm a criterion runs, with its bound parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    CompleteMediation,
    EconomyOfMechanism(EconomyConfig),
    LeastCommonMechanism(CommonMechanismConfig),
    LayeredArchitecture,
    /// Placeholder for a principle that has no check yet.
    NotImplemented,
}

impl Check {
    /// Runs the check against `dsm`.
    ///
    /// # Errors
    /// Only complete mediation can fail, on a mediation/observed shape
    /// mismatch.
    pub fn run(&self, dsm: &DependencyMatrix) -> Result<Verdict> {
        let verdict = match self {
            Self::CompleteMediation => {
                let report = mediation::check(dsm)?;
                Verdict::from_check(report.is_compliant(), report.message())
            }
            Self::EconomyOfMechanism(config) => economy::check(dsm, config),
            Self::LeastCommonMechanism(config) => common::check(dsm, config),
            Self::LayeredArchitecture => layered::check(dsm),
            Self::NotImplemented => Verdict::not_implemented(),
        };
        Ok(verdict)
    }

    #[must_use]
    pub fn is_implemented(&self) -> bool {
        !matches!(self, Self::NotImplemented)
    }
}

/// A secure-design principle that can be checked against a DSM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub codename: String,
    pub title: String,
    pub description: String,
    pub hint: String,
    pub check: Check,
}

impl Criterion {
    #[must_use]
    pub fn new(codename: impl Into<String>, title: impl Into<String>, check: Check) -> Self {
        Self {
            codename: codename.into(),
            title: title.into(),
            description: String::new(),
            hint: String::new(),
            check,
        }
    }

    /// Builds a criterion carrying the built-in text for `codename`.
    #[must_use]
    pub fn builtin(codename: &str, check: Check) -> Self {
        let mut criterion = Self::new(codename, codename, check);
        if let Some(t) = text::lookup(codename) {
            criterion.title = t.title.to_string();
            criterion.description = t.description.to_string();
            criterion.hint = t.hint.to_string();
        }
        criterion
    }

    /// Evaluates this criterion.
    ///
    /// # Errors
    /// Propagates configuration errors from the underlying check.
    pub fn evaluate(&self, dsm: &DependencyMatrix) -> Result<Verdict> {
        self.check.run(dsm)
    }
}
