// src/criteria/types.rs
//! Outcome types shared by every criterion.

use std::fmt;

use serde::Serialize;

/// Result state of a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Failed,
    Passed,
    /// The check has not been written yet.
    NotImplemented,
    /// The criterion was deliberately skipped.
    Ignored,
}

impl Outcome {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Failed => "FAILED",
            Self::Passed => "PASSED",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::Ignored => "IGNORED",
        }
    }

    #[must_use]
    pub fn is_failure(self) -> bool {
        self == Self::Failed
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An outcome paired with its diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub outcome: Outcome,
    pub message: String,
}

impl Verdict {
    #[must_use]
    pub fn passed() -> Self {
        Self { outcome: Outcome::Passed, message: String::new() }
    }

    #[must_use]
    pub fn failed(message: String) -> Self {
        Self { outcome: Outcome::Failed, message }
    }

    #[must_use]
    pub fn not_implemented() -> Self {
        Self { outcome: Outcome::NotImplemented, message: String::new() }
    }

    #[must_use]
    pub fn ignored() -> Self {
        Self { outcome: Outcome::Ignored, message: String::new() }
    }

    /// Passes with an empty message or fails with `message`.
    #[must_use]
    pub fn from_check(passed: bool, message: String) -> Self {
        if passed {
            Self::passed()
        } else {
            Self::failed(message)
        }
    }
}
