// src/cli/handlers.rs
//! Command handlers. Each returns the exit code of the command.

use std::path::Path;

use anyhow::{Context, Result};

use super::args::CheckArgs;
use crate::config::Config;
use crate::criteria::RunReport;
use crate::dsm::{io, DependencyMatrix};
use crate::exit::ArchanExit;
use crate::mediation;
use crate::reporting::{console, json, OutputFormat};

/// Runs every criterion and prints the report.
///
/// # Errors
/// Returns error if the config or matrix cannot be loaded, or a criterion
/// raises a configuration error.
pub fn handle_check(args: &CheckArgs, config_path: Option<&Path>) -> Result<ArchanExit> {
    let mut config = load_config(config_path)?;
    if let Some(factor) = args.simplicity_factor {
        config.criteria.simplicity_factor = factor;
    }
    if let Some(factor) = args.independence_factor {
        config.criteria.independence_factor = factor;
    }

    let dsm = load_matrix(&args.matrix)?;
    let report = run_check(&config, &dsm, args.parallel)?;

    match args.format {
        OutputFormat::Terminal => console::print_report(&report),
        OutputFormat::Json => json::print_report(&report)?,
    }
    Ok(ArchanExit::from_report(&report))
}

/// Runs the configured registry against `dsm`.
///
/// # Errors
/// Returns error on invalid settings or a criterion configuration error.
pub fn run_check(config: &Config, dsm: &DependencyMatrix, parallel: bool) -> Result<RunReport> {
    let registry = config.registry()?;
    let report = if parallel {
        registry.run_all_parallel(dsm)?
    } else {
        registry.run_all(dsm)?
    };
    Ok(report)
}

/// Lists the registered criteria.
///
/// # Errors
/// Returns error if the config is invalid.
pub fn handle_criteria(config_path: Option<&Path>) -> Result<ArchanExit> {
    let registry = load_config(config_path)?.registry()?;
    console::print_criteria(&registry);
    Ok(ArchanExit::Success)
}

/// Prints the mediation matrix and its untolerated dependencies.
///
/// # Errors
/// Returns error if the matrix cannot be loaded.
pub fn handle_mediation(matrix: &Path) -> Result<ArchanExit> {
    let dsm = load_matrix(matrix)?;
    let generated = mediation::generate(&dsm);
    let compliance = mediation::compare(&dsm, &generated)?;
    console::print_mediation(&dsm, &generated, &compliance);
    if compliance.is_compliant() {
        Ok(ArchanExit::Success)
    } else {
        Ok(ArchanExit::CheckFailed)
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().context("cannot resolve working directory")?;
    Ok(Config::load(path, &cwd)?)
}

fn load_matrix(path: &Path) -> Result<DependencyMatrix> {
    Ok(io::load(path)?)
}
