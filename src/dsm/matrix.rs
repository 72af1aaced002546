// src/dsm/matrix.rs
//! The observed dependency matrix.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::{ArchanError, Result};

/// Every check walks all N² cells; beyond this size a run is still correct
/// but slow enough to warrant a warning.
pub const PRACTICAL_ENTITY_LIMIT: usize = 10_000;

/// Returns the substring before the first dot of an entity name.
#[must_use]
pub fn top_level_package(entity: &str) -> &str {
    entity.split('.').next().unwrap_or(entity)
}

/// A square, categorized matrix of dependency weights.
///
/// Cell `(i, j)` holds the number of dependencies from entity `i` to
/// entity `j`. The ordering of entities is significant: earlier entities are
/// treated as lower layers by the layered architecture criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DependencyMatrix {
    entities: Vec<String>,
    categories: Vec<Category>,
    dependency_matrix: Vec<Vec<u32>>,
}

/// Unchecked wire form, validated into a [`DependencyMatrix`].
#[derive(Debug, Deserialize)]
struct RawMatrix {
    entities: Vec<String>,
    categories: Vec<String>,
    dependency_matrix: Vec<Vec<u32>>,
}

impl TryFrom<RawMatrix> for DependencyMatrix {
    type Error = ArchanError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_labels(raw.entities, &raw.categories, raw.dependency_matrix)
    }
}

impl DependencyMatrix {
    /// Builds a matrix after checking its shape invariants.
    ///
    /// # Errors
    /// Returns `MalformedMatrix` if the matrix is empty, ragged, not aligned
    /// with the entity list, or names an entity twice.
    pub fn new(
        entities: Vec<String>,
        categories: Vec<Category>,
        dependency_matrix: Vec<Vec<u32>>,
    ) -> Result<Self> {
        validate_shape(&entities, &categories, &dependency_matrix)?;
        let size = entities.len();
        if size > PRACTICAL_ENTITY_LIMIT {
            tracing::warn!(
                size,
                limit = PRACTICAL_ENTITY_LIMIT,
                "dependency matrix exceeds practical size, checks are quadratic"
            );
        }
        Ok(Self {
            entities,
            categories,
            dependency_matrix,
        })
    }

    /// Builds a matrix from textual category labels.
    ///
    /// # Errors
    /// Returns `InvalidCategory` for an unknown label, otherwise the same
    /// errors as [`DependencyMatrix::new`].
    pub fn from_labels<S: AsRef<str>>(
        entities: Vec<String>,
        labels: &[S],
        dependency_matrix: Vec<Vec<u32>>,
    ) -> Result<Self> {
        let categories = labels
            .iter()
            .map(|l| l.as_ref().parse())
            .collect::<Result<Vec<Category>>>()?;
        Self::new(entities, categories, dependency_matrix)
    }

    /// Number of entities (N).
    #[must_use]
    pub fn size(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.dependency_matrix
    }

    #[must_use]
    pub fn entity(&self, i: usize) -> &str {
        &self.entities[i]
    }

    #[must_use]
    pub fn category(&self, i: usize) -> Category {
        self.categories[i]
    }

    /// Dependency weight from entity `i` to entity `j`.
    #[must_use]
    pub fn weight(&self, i: usize, j: usize) -> u32 {
        self.dependency_matrix[i][j]
    }

    #[must_use]
    pub fn package(&self, i: usize) -> &str {
        top_level_package(&self.entities[i])
    }

    /// True when two distinct entities share a top-level package.
    #[must_use]
    pub fn same_package(&self, i: usize, j: usize) -> bool {
        i != j && self.package(i) == self.package(j)
    }
}

fn validate_shape(entities: &[String], categories: &[Category], rows: &[Vec<u32>]) -> Result<()> {
    let size = entities.len();
    if size == 0 {
        return Err(ArchanError::MalformedMatrix("no entities".into()));
    }
    if categories.len() != size {
        return Err(ArchanError::MalformedMatrix(format!(
            "{} categories for {size} entities",
            categories.len()
        )));
    }
    if rows.len() != size {
        return Err(ArchanError::MalformedMatrix(format!(
            "{} rows for {size} entities",
            rows.len()
        )));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
        return Err(ArchanError::MalformedMatrix(format!(
            "row {i} has {} columns, expected {size}",
            row.len()
        )));
    }
    let mut seen = HashSet::with_capacity(size);
    if let Some(dup) = entities.iter().find(|e| !seen.insert(e.as_str())) {
        return Err(ArchanError::MalformedMatrix(format!(
            "entity '{dup}' listed twice"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_top_level_package() {
        assert_eq!(top_level_package("pkg.sub.module"), "pkg");
        assert_eq!(top_level_package("single"), "single");
    }

    #[test]
    fn test_same_package_excludes_self() {
        let dsm = DependencyMatrix::new(
            names(&["a.x", "a.y", "b.z"]),
            vec![Category::AppModule; 3],
            vec![vec![0; 3]; 3],
        )
        .unwrap();
        assert!(dsm.same_package(0, 1));
        assert!(!dsm.same_package(0, 0));
        assert!(!dsm.same_package(0, 2));
    }

    #[test]
    fn test_rejects_empty() {
        let err = DependencyMatrix::new(Vec::new(), Vec::new(), Vec::new());
        assert!(matches!(err, Err(ArchanError::MalformedMatrix(_))));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = DependencyMatrix::new(
            names(&["a", "b"]),
            vec![Category::Data; 2],
            vec![vec![0, 0], vec![0]],
        );
        assert!(matches!(err, Err(ArchanError::MalformedMatrix(_))));
    }

    #[test]
    fn test_rejects_category_length_mismatch() {
        let err = DependencyMatrix::new(
            names(&["a", "b"]),
            vec![Category::Data],
            vec![vec![0, 0], vec![0, 0]],
        );
        assert!(matches!(err, Err(ArchanError::MalformedMatrix(_))));
    }

    #[test]
    fn test_rejects_duplicate_entity() {
        let err = DependencyMatrix::new(
            names(&["a", "a"]),
            vec![Category::Data; 2],
            vec![vec![0, 0], vec![0, 0]],
        );
        assert!(matches!(err, Err(ArchanError::MalformedMatrix(ref m)) if m.contains("'a'")));
    }

    #[test]
    fn test_from_labels_rejects_unknown_category() {
        let err = DependencyMatrix::from_labels(names(&["a"]), &["service"], vec![vec![0]]);
        assert!(matches!(err, Err(ArchanError::InvalidCategory(_))));
    }

    #[test]
    fn test_deserialize_json() {
        let json = r#"{
            "entities": ["django", "app.views"],
            "categories": ["framework", "app_module"],
            "dependency_matrix": [[0, 0], [3, 0]]
        }"#;
        let dsm: DependencyMatrix = serde_json::from_str(json).unwrap();
        assert_eq!(dsm.size(), 2);
        assert_eq!(dsm.category(1), Category::AppModule);
        assert_eq!(dsm.weight(1, 0), 3);
    }

    #[test]
    fn test_deserialize_rejects_bad_category() {
        let json = r#"{"entities": ["a"], "categories": ["nope"], "dependency_matrix": [[0]]}"#;
        let err = serde_json::from_str::<DependencyMatrix>(json);
        assert!(err.is_err());
    }
}
