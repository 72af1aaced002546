// src/reporting/json.rs
//! JSON output for scripting and CI.

use anyhow::Result;
use serde::Serialize;

use crate::criteria::{CriterionResult, RunReport};

#[derive(Serialize)]
struct JsonReport<'a> {
    matrix_size: usize,
    passed: bool,
    results: &'a [CriterionResult],
}

/// Renders a run as a pretty-printed JSON document.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &RunReport) -> Result<String> {
    let doc = JsonReport {
        matrix_size: report.matrix_size,
        passed: report.passed(),
        results: &report.results,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Prints a run as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_report(report: &RunReport) -> Result<()> {
    println!("{}", render(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Outcome;

    #[test]
    fn test_render_shape() {
        let report = RunReport {
            matrix_size: 3,
            results: vec![CriterionResult {
                codename: "LAYERED_ARCHITECTURE".into(),
                title: "Layered Architecture".into(),
                outcome: Outcome::Failed,
                message: "  Dependency from a to b breaks the layered architecture.".into(),
                hint: String::new(),
            }],
        };
        let value: serde_json::Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        assert_eq!(value["matrix_size"], 3);
        assert_eq!(value["passed"], false);
        assert_eq!(value["results"][0]["outcome"], "FAILED");
        assert_eq!(value["results"][0]["codename"], "LAYERED_ARCHITECTURE");
    }
}
