// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{CheckArgs, Cli, Commands};
pub use handlers::{handle_check, handle_criteria, handle_mediation, run_check};
