// src/criteria/layered.rs
//! Layered architecture: dependencies only flow from later entities to
//! earlier ones, unless a broker is involved.
//!
//! Entity order encodes the layering (earlier = lower). Only forward edges
//! (`i < j`) are inspected; a backward edge is the expected direction.

use crate::dsm::{Category, DependencyMatrix};

use super::types::Verdict;

/// A forward dependency between two packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerViolation {
    pub from: usize,
    pub to: usize,
}

/// Finds every forward cross-package edge that does not involve a broker.
#[must_use]
pub fn find_violations(dsm: &DependencyMatrix) -> Vec<LayerViolation> {
    let size = dsm.size();
    let mut violations = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            if breaks_layering(dsm, i, j) {
                violations.push(LayerViolation { from: i, to: j });
            }
        }
    }
    violations
}

fn breaks_layering(dsm: &DependencyMatrix, i: usize, j: usize) -> bool {
    dsm.category(i) != Category::Broker
        && dsm.category(j) != Category::Broker
        && dsm.package(i) != dsm.package(j)
        && dsm.weight(i, j) > 0
}

#[must_use]
pub fn check(dsm: &DependencyMatrix) -> Verdict {
    let violations = find_violations(dsm);
    let message = violations
        .iter()
        .map(|v| {
            format!(
                "  Dependency from {} to {} breaks the layered architecture.",
                dsm.entity(v.from),
                dsm.entity(v.to)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    Verdict::from_check(violations.is_empty(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(entities: &[&str], categories: Vec<Category>, edges: &[(usize, usize)]) -> DependencyMatrix {
        let n = entities.len();
        let mut rows = vec![vec![0; n]; n];
        for &(i, j) in edges {
            rows[i][j] = 1;
        }
        DependencyMatrix::new(entities.iter().map(ToString::to_string).collect(), categories, rows)
            .unwrap()
    }

    #[test]
    fn test_same_package_forward_edge_allowed() {
        let dsm = matrix(&["a.x", "a.y"], vec![Category::AppModule; 2], &[(0, 1)]);
        assert!(find_violations(&dsm).is_empty());
    }

    #[test]
    fn test_broker_exempt_in_either_position() {
        let dsm = matrix(
            &["a.x", "broker", "c.z"],
            vec![Category::AppModule, Category::Broker, Category::AppModule],
            &[(0, 1), (1, 2)],
        );
        assert!(find_violations(&dsm).is_empty());
    }

    #[test]
    fn test_reports_every_violation() {
        let dsm = matrix(
            &["a", "b", "c"],
            vec![Category::CoreLib, Category::AppLib, Category::AppModule],
            &[(0, 1), (0, 2), (1, 2), (2, 0)],
        );
        let found = find_violations(&dsm);
        assert_eq!(found.len(), 3);
        let verdict = check(&dsm);
        assert_eq!(verdict.message.lines().count(), 3);
        assert!(verdict
            .message
            .starts_with("  Dependency from a to b breaks the layered architecture."));
    }
}
