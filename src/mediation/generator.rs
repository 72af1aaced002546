// src/mediation/generator.rs
//! Derives the expected dependency matrix from entity categories.
//!
//! Each entity may depend on itself. Beyond that:
//! - framework only optionally depends on framework;
//! - core libs may use the framework and other core libs;
//! - app libs may also use other app libs;
//! - app modules may use the framework, libs, brokers and data, but must
//!   reach other app modules through a broker;
//! - brokers may use app modules, core libs and the framework;
//! - data may only use the framework.
//!
//! Entities of the same top-level package tolerate each other, except for
//! framework and data.

use serde::Serialize;

use crate::dsm::{Category, DependencyMatrix};

/// Expected state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i8")]
#[repr(i8)]
pub enum Mediation {
    /// Not considered by the comparator.
    DontCare = -1,
    /// The dependency must not exist.
    Forbidden = 0,
    /// The dependency must exist.
    Required = 1,
}

impl Mediation {
    #[must_use]
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl From<Mediation> for i8 {
    fn from(m: Mediation) -> Self {
        m.value()
    }
}

/// An N×N matrix of [`Mediation`] cells, index-aligned with its source DSM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediationMatrix {
    cells: Vec<Vec<Mediation>>,
}

impl MediationMatrix {
    #[must_use]
    pub fn from_rows(cells: Vec<Vec<Mediation>>) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Mediation>] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Mediation {
        self.cells[i][j]
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }
}

/// Generates the mediation matrix of `dsm`.
#[must_use]
pub fn generate(dsm: &DependencyMatrix) -> MediationMatrix {
    let size = dsm.size();
    let cells = (0..size)
        .map(|i| (0..size).map(|j| mediate(dsm, i, j)).collect())
        .collect();
    MediationMatrix { cells }
}

fn mediate(dsm: &DependencyMatrix, i: usize, j: usize) -> Mediation {
    if tolerates(dsm, i, j) {
        Mediation::DontCare
    } else {
        Mediation::Forbidden
    }
}

fn tolerates(dsm: &DependencyMatrix, i: usize, j: usize) -> bool {
    let target = dsm.category(j);
    let local = i == j || dsm.same_package(i, j);
    match dsm.category(i) {
        Category::Framework => target == Category::Framework,
        Category::CoreLib => local || matches!(target, Category::Framework | Category::CoreLib),
        Category::AppLib => {
            local
                || matches!(
                    target,
                    Category::Framework | Category::CoreLib | Category::AppLib
                )
        }
        Category::AppModule => {
            local
                || matches!(
                    target,
                    Category::Framework
                        | Category::CoreLib
                        | Category::AppLib
                        | Category::Broker
                        | Category::Data
                )
        }
        Category::Broker => {
            local
                || matches!(
                    target,
                    Category::AppModule | Category::CoreLib | Category::Framework
                )
        }
        Category::Data => i == j || target == Category::Framework,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dsm(entities: &[&str], categories: &[Category]) -> DependencyMatrix {
        let n = entities.len();
        DependencyMatrix::new(
            entities.iter().map(ToString::to_string).collect(),
            categories.to_vec(),
            vec![vec![0; n]; n],
        )
        .unwrap()
    }

    #[test]
    fn test_framework_only_tolerates_framework() {
        let m = generate(&dsm(
            &["django", "celery", "app.core"],
            &[Category::Framework, Category::Framework, Category::CoreLib],
        ));
        assert_eq!(m.get(0, 1), Mediation::DontCare);
        assert_eq!(m.get(0, 2), Mediation::Forbidden);
    }

    #[test]
    fn test_framework_ignores_same_package() {
        let m = generate(&dsm(
            &["pkg.fw", "pkg.mod"],
            &[Category::Framework, Category::AppModule],
        ));
        assert_eq!(m.get(0, 1), Mediation::Forbidden);
    }

    #[test]
    fn test_app_module_needs_broker_for_modules() {
        let m = generate(&dsm(
            &["a.x", "b.y", "broker"],
            &[Category::AppModule, Category::AppModule, Category::Broker],
        ));
        assert_eq!(m.get(0, 1), Mediation::Forbidden);
        assert_eq!(m.get(0, 2), Mediation::DontCare);
        assert_eq!(m.get(2, 0), Mediation::DontCare);
    }

    #[test]
    fn test_same_package_tolerance() {
        let m = generate(&dsm(
            &["a.x", "a.y"],
            &[Category::AppModule, Category::AppModule],
        ));
        assert_eq!(m.get(0, 1), Mediation::DontCare);
        assert_eq!(m.get(1, 0), Mediation::DontCare);
    }

    #[test]
    fn test_core_lib_cannot_use_app_lib() {
        let m = generate(&dsm(
            &["core", "lib"],
            &[Category::CoreLib, Category::AppLib],
        ));
        assert_eq!(m.get(0, 1), Mediation::Forbidden);
        assert_eq!(m.get(1, 0), Mediation::DontCare);
    }

    #[test]
    fn test_broker_cannot_use_app_lib_or_data() {
        let m = generate(&dsm(
            &["broker", "lib", "store"],
            &[Category::Broker, Category::AppLib, Category::Data],
        ));
        assert_eq!(m.get(0, 1), Mediation::Forbidden);
        assert_eq!(m.get(0, 2), Mediation::Forbidden);
    }

    #[test]
    fn test_data_ignores_same_package() {
        let m = generate(&dsm(
            &["pkg.models", "pkg.other", "django"],
            &[Category::Data, Category::Data, Category::Framework],
        ));
        assert_eq!(m.get(0, 1), Mediation::Forbidden);
        assert_eq!(m.get(0, 2), Mediation::DontCare);
    }

    #[test]
    fn test_never_required_and_diagonal_tolerated() {
        let entities: Vec<String> = Category::ALL
            .iter()
            .enumerate()
            .flat_map(|(k, _)| [format!("p{k}.a"), format!("p{k}.b"), format!("q{k}")])
            .collect();
        let names: Vec<&str> = entities.iter().map(String::as_str).collect();
        let categories: Vec<Category> = Category::ALL
            .iter()
            .flat_map(|c| [*c, *c, *c])
            .collect();
        let m = generate(&dsm(&names, &categories));

        for (i, row) in m.rows().iter().enumerate() {
            assert_eq!(row[i], Mediation::DontCare, "diagonal at {i}");
            assert!(row.iter().all(|c| *c != Mediation::Required));
        }
    }

    #[test]
    fn test_serializes_as_integers() {
        let m = generate(&dsm(
            &["django", "app"],
            &[Category::Framework, Category::AppModule],
        ));
        let json = serde_json::to_string(&m).unwrap_or_default();
        assert_eq!(json, r#"{"cells":[[-1,0],[-1,-1]]}"#);
    }
}
