// src/criteria/mod.rs
//! Secure-design criteria evaluated against a dependency matrix.
//!
//! Each criterion is a pure function of an immutable [`DependencyMatrix`]
//! producing a [`Verdict`]. The [`Registry`] holds them in reporting order.
//!
//! [`DependencyMatrix`]: crate::dsm::DependencyMatrix

pub mod common;
pub mod criterion;
pub mod economy;
pub mod layered;
pub mod registry;
pub mod text;
pub mod types;

pub use common::CommonMechanismConfig;
pub use criterion::{Check, Criterion};
pub use economy::EconomyConfig;
pub use registry::{CriterionResult, Registry, RegistryBuilder, RunReport};
pub use types::{Outcome, Verdict};
