// src/criteria/registry.rs
//! Ordered collection of criteria and the "run all" operation.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;

use crate::dsm::DependencyMatrix;
use crate::error::{ArchanError, Result};

use super::common::CommonMechanismConfig;
use super::criterion::{Check, Criterion};
use super::economy::EconomyConfig;
use super::text;
use super::types::{Outcome, Verdict};

/// Result of one criterion within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionResult {
    pub codename: String,
    pub title: String,
    pub outcome: Outcome,
    pub message: String,
    pub hint: String,
}

/// Results of every registered criterion, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub matrix_size: usize,
    pub results: Vec<CriterionResult>,
}

impl RunReport {
    /// True unless an implemented criterion failed.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.results.iter().any(|r| r.outcome.is_failure())
    }

    #[must_use]
    pub fn get(&self, codename: &str) -> Option<&CriterionResult> {
        self.results.iter().find(|r| r.codename == codename)
    }

    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.results.iter().filter(|r| r.outcome == outcome).count()
    }
}

/// Builds a [`Registry`]. Registration is append-only.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    criteria: Vec<Criterion>,
    ignored: HashSet<String>,
}

impl RegistryBuilder {
    /// Appends a criterion.
    ///
    /// # Errors
    /// Returns `DuplicateCodename` if the codename is already registered.
    pub fn register(mut self, criterion: Criterion) -> Result<Self> {
        if self.criteria.iter().any(|c| c.codename == criterion.codename) {
            return Err(ArchanError::DuplicateCodename(criterion.codename));
        }
        self.criteria.push(criterion);
        Ok(self)
    }

    /// Replaces the remediation hint of a registered criterion.
    ///
    /// # Errors
    /// Returns `UnknownCriterion` if `codename` is not registered.
    pub fn hint(mut self, codename: &str, hint: &str) -> Result<Self> {
        self.find_mut(codename)?.hint = hint.to_string();
        Ok(self)
    }

    /// Replaces the description of a registered criterion.
    ///
    /// # Errors
    /// Returns `UnknownCriterion` if `codename` is not registered.
    pub fn describe(mut self, codename: &str, description: &str) -> Result<Self> {
        self.find_mut(codename)?.description = description.to_string();
        Ok(self)
    }

    fn find_mut(&mut self, codename: &str) -> Result<&mut Criterion> {
        self.criteria
            .iter_mut()
            .find(|c| c.codename == codename)
            .ok_or_else(|| ArchanError::UnknownCriterion(codename.to_string()))
    }

    /// Marks a criterion to be reported as ignored instead of run.
    #[must_use]
    pub fn ignore(mut self, codename: impl Into<String>) -> Self {
        self.ignored.insert(codename.into());
        self
    }

    /// Freezes the registry.
    ///
    /// # Errors
    /// Returns `UnknownCriterion` if an ignored codename was never registered.
    pub fn build(self) -> Result<Registry> {
        if let Some(unknown) = self
            .ignored
            .iter()
            .find(|name| !self.criteria.iter().any(|c| &c.codename == *name))
        {
            return Err(ArchanError::UnknownCriterion(unknown.clone()));
        }
        Ok(Registry {
            criteria: self.criteria,
            ignored: self.ignored,
        })
    }
}

/// An immutable, ordered set of criteria.
#[derive(Debug)]
pub struct Registry {
    criteria: Vec<Criterion>,
    ignored: HashSet<String>,
}

impl Registry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registers the eight secure-design principles in their canonical order.
    ///
    /// # Errors
    /// Returns `InvalidFactor` if either config carries a zero factor.
    pub fn standard_builder(
        economy: EconomyConfig,
        common: CommonMechanismConfig,
    ) -> Result<RegistryBuilder> {
        economy.validate()?;
        common.validate()?;
        Self::builder()
            .register(Criterion::builtin(text::COMPLETE_MEDIATION, Check::CompleteMediation))?
            .register(Criterion::builtin(
                text::ECONOMY_OF_MECHANISM,
                Check::EconomyOfMechanism(economy),
            ))?
            .register(Criterion::builtin(text::SEPARATION_OF_PRIVILEGES, Check::NotImplemented))?
            .register(Criterion::builtin(text::LEAST_PRIVILEGES, Check::NotImplemented))?
            .register(Criterion::builtin(
                text::LEAST_COMMON_MECHANISM,
                Check::LeastCommonMechanism(common),
            ))?
            .register(Criterion::builtin(text::LAYERED_ARCHITECTURE, Check::LayeredArchitecture))?
            .register(Criterion::builtin(text::OPEN_DESIGN, Check::NotImplemented))?
            .register(Criterion::builtin(text::CODE_CLEAN, Check::NotImplemented))
    }

    /// The standard registry with default parameters.
    ///
    /// # Errors
    /// See [`Registry::standard_builder`].
    pub fn standard() -> Result<Self> {
        Self::standard_builder(EconomyConfig::default(), CommonMechanismConfig::default())?.build()
    }

    #[must_use]
    pub fn get(&self, codename: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.codename == codename)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    #[must_use]
    pub fn is_ignored(&self, codename: &str) -> bool {
        self.ignored.contains(codename)
    }

    /// Runs every criterion against `dsm`, one after the other.
    ///
    /// # Errors
    /// Stops at the first configuration error.
    pub fn run_all(&self, dsm: &DependencyMatrix) -> Result<RunReport> {
        let results = self
            .criteria
            .iter()
            .map(|c| self.run_one(c, dsm))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.finish(dsm, results))
    }

    /// Same as [`Registry::run_all`], fanning criteria out across threads.
    ///
    /// # Errors
    /// Returns a configuration error raised by any criterion.
    pub fn run_all_parallel(&self, dsm: &DependencyMatrix) -> Result<RunReport> {
        let results = self
            .criteria
            .par_iter()
            .map(|c| self.run_one(c, dsm))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.finish(dsm, results))
    }

    fn run_one(&self, criterion: &Criterion, dsm: &DependencyMatrix) -> Result<CriterionResult> {
        let verdict = if self.is_ignored(&criterion.codename) {
            Verdict::ignored()
        } else {
            criterion.evaluate(dsm)?
        };
        tracing::debug!(
            codename = %criterion.codename,
            outcome = %verdict.outcome,
            "criterion evaluated"
        );
        Ok(CriterionResult {
            codename: criterion.codename.clone(),
            title: criterion.title.clone(),
            outcome: verdict.outcome,
            message: verdict.message,
            hint: criterion.hint.clone(),
        })
    }

    fn finish(&self, dsm: &DependencyMatrix, results: Vec<CriterionResult>) -> RunReport {
        let report = RunReport {
            matrix_size: dsm.size(),
            results,
        };
        tracing::info!(
            entities = report.matrix_size,
            criteria = self.len(),
            failed = report.count(Outcome::Failed),
            "criteria run complete"
        );
        report
    }
}
