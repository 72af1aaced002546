// src/reporting/console.rs
//! Colored terminal output for criterion runs and mediation matrices.

use colored::{ColoredString, Colorize};

use crate::criteria::{CriterionResult, Outcome, Registry, RunReport};
use crate::dsm::DependencyMatrix;
use crate::mediation::{ComplianceReport, Mediation, MediationMatrix};

/// Prints one line per criterion, with message and hint under failures.
pub fn print_report(report: &RunReport) {
    println!(
        "\n{} {} entities | {} criteria",
        "ARCHAN".cyan().bold(),
        report.matrix_size,
        report.results.len()
    );
    for result in &report.results {
        print_result(result);
    }
    print_summary(report);
}

fn print_result(result: &CriterionResult) {
    println!(
        "  {:<26} {:<28} {}",
        result.codename,
        result.title.dimmed(),
        paint(result.outcome)
    );
    if result.outcome != Outcome::Failed {
        return;
    }
    for line in result.message.lines() {
        println!("    {}", line.trim_start().red());
    }
    if !result.hint.is_empty() {
        println!("    {} {}", "→".cyan(), result.hint.dimmed());
    }
}

fn paint(outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::Passed => outcome.label().green(),
        Outcome::Failed => outcome.label().red().bold(),
        Outcome::NotImplemented => outcome.label().yellow(),
        Outcome::Ignored => outcome.label().dimmed(),
    }
}

fn print_summary(report: &RunReport) {
    let failed = report.count(Outcome::Failed);
    let failed_label = if failed == 0 {
        failed.to_string().green()
    } else {
        failed.to_string().red()
    };
    println!(
        "\n  {} passed | {} failed | {} not implemented | {} ignored",
        report.count(Outcome::Passed).to_string().green(),
        failed_label,
        report.count(Outcome::NotImplemented),
        report.count(Outcome::Ignored),
    );
    if report.passed() {
        println!("{}", "  ✓ Architecture complies with all implemented criteria.".green());
    }
}

/// Lists the criteria of a registry.
pub fn print_criteria(registry: &Registry) {
    for criterion in registry.iter() {
        let status = if registry.is_ignored(&criterion.codename) {
            "ignored".dimmed()
        } else if criterion.check.is_implemented() {
            "implemented".green()
        } else {
            "not implemented".yellow()
        };
        println!(
            "{} {} ({status})",
            criterion.codename.bold(),
            criterion.title.dimmed()
        );
        if !criterion.description.is_empty() {
            println!("    {}", criterion.description);
        }
        if !criterion.hint.is_empty() {
            println!("    {} {}", "→".cyan(), criterion.hint.dimmed());
        }
    }
}

/// Prints the mediation matrix as a grid, followed by its discrepancies.
pub fn print_mediation(dsm: &DependencyMatrix, mediation: &MediationMatrix, compliance: &ComplianceReport) {
    println!("\n{}", "MEDIATION MATRIX".cyan().bold());
    let width = dsm.entities().iter().map(String::len).max().unwrap_or(0);
    for (i, row) in mediation.rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(j, m)| cell(*m, dsm.weight(i, j)).to_string())
            .collect();
        println!(
            "  {:<width$} {:<12} {}",
            dsm.entity(i),
            dsm.category(i).label().dimmed(),
            cells.join(" ")
        );
    }

    if compliance.is_compliant() {
        println!("{}", "\n  ✓ No untolerated dependency.".green());
        return;
    }
    println!(
        "\n{} ({})",
        "UNTOLERATED DEPENDENCIES".red().bold(),
        compliance.discrepancies.len()
    );
    for d in &compliance.discrepancies {
        println!("    {} → {} ({})", d.from, d.to.red(), d.observed);
    }
}

fn cell(mediation: Mediation, observed: u32) -> ColoredString {
    let label = format!("{:>2}", mediation.value());
    match mediation {
        Mediation::DontCare => label.dimmed(),
        Mediation::Forbidden if observed > 0 => label.red().bold(),
        Mediation::Forbidden | Mediation::Required => label.normal(),
    }
}
