//! Architecture compliance checking over dependency structure matrices.
//!
//! A [`dsm::DependencyMatrix`] describes who depends on whom and which
//! architectural role each entity plays. The [`criteria`] module checks it
//! against secure-design principles; [`mediation`] holds the rule table
//! behind complete mediation.

pub mod cli;
pub mod config;
pub mod criteria;
pub mod dsm;
pub mod error;
pub mod exit;
pub mod mediation;
pub mod reporting;
