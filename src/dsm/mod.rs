// src/dsm/mod.rs
//! Design Structure Matrix: the categorized dependency matrix every
//! criterion is evaluated against.

pub mod category;
pub mod io;
pub mod matrix;

pub use category::Category;
pub use matrix::{top_level_package, DependencyMatrix, PRACTICAL_ENTITY_LIMIT};
