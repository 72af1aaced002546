//! Output formatting for criterion runs.
//!
//! Two renderers share the same [`RunReport`]: a colored terminal report
//! and a machine-readable JSON document.
//!
//! [`RunReport`]: crate::criteria::RunReport

pub mod console;
pub mod json;

use clap::ValueEnum;

/// Selectable report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}
