use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(name = "archan", version, about = "Architecture compliance checker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file (defaults to ./archan.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every criterion against a dependency matrix
    Check(CheckArgs),
    /// List the registered criteria
    Criteria,
    /// Print the mediation matrix of a dependency matrix
    Mediation {
        /// JSON dependency matrix
        matrix: PathBuf,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// JSON dependency matrix
    pub matrix: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
    /// Override the economy of mechanism simplicity factor
    #[arg(long, value_name = "N")]
    pub simplicity_factor: Option<u32>,
    /// Override the least common mechanism independence factor
    #[arg(long, value_name = "N")]
    pub independence_factor: Option<u32>,
    /// Evaluate criteria on a thread pool
    #[arg(long)]
    pub parallel: bool,
}
