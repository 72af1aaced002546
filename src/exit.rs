// src/exit.rs
//! Standardized process exit codes for `archan`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::criteria::RunReport;
use crate::error::ArchanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ArchanExit {
    /// Every implemented criterion passed.
    Success = 0,
    /// Generic error (e.g. IO).
    Error = 1,
    /// Matrix or configuration rejected (bad category, shape, factor, syntax).
    InvalidInput = 2,
    /// At least one criterion failed.
    CheckFailed = 3,
}

impl ArchanExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a run to its exit code. Not-implemented and ignored criteria
    /// never fail a run.
    #[must_use]
    pub fn from_report(report: &RunReport) -> Self {
        if report.passed() {
            Self::Success
        } else {
            Self::CheckFailed
        }
    }

    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ArchanError>() {
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for ArchanExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CriterionResult, Outcome};

    fn report(outcomes: &[Outcome]) -> RunReport {
        RunReport {
            matrix_size: 1,
            results: outcomes
                .iter()
                .map(|o| CriterionResult {
                    codename: o.label().into(),
                    title: String::new(),
                    outcome: *o,
                    message: String::new(),
                    hint: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_not_implemented_does_not_fail() {
        let r = report(&[Outcome::Passed, Outcome::NotImplemented, Outcome::Ignored]);
        assert_eq!(ArchanExit::from_report(&r), ArchanExit::Success);
    }

    #[test]
    fn test_failure_maps_to_check_failed() {
        let r = report(&[Outcome::Passed, Outcome::Failed]);
        assert_eq!(ArchanExit::from_report(&r), ArchanExit::CheckFailed);
    }

    #[test]
    fn test_errors_map_by_kind() {
        let invalid = anyhow::Error::new(ArchanError::InvalidCategory("x".into()));
        assert_eq!(ArchanExit::from_error(&invalid), ArchanExit::InvalidInput);

        let io = anyhow::Error::new(ArchanError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk")));
        assert_eq!(ArchanExit::from_error(&io), ArchanExit::Error);

        let other = anyhow::anyhow!("boom");
        assert_eq!(ArchanExit::from_error(&other), ArchanExit::Error);
    }
}
