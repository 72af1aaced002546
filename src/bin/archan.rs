// src/bin/archan.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use archan_core::cli::{self, Cli, Commands};
use archan_core::exit::ArchanExit;

fn main() -> ArchanExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ArchanExit::from_error(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // --verbose wins over RUST_LOG for our own crate
    if verbose {
        if let Ok(directive) = "archan_core=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<ArchanExit> {
    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Check(args) => cli::handle_check(args, config),
        Commands::Criteria => cli::handle_criteria(config),
        Commands::Mediation { matrix } => cli::handle_mediation(matrix),
    }
}
