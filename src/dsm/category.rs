// src/dsm/category.rs
//! Architectural roles an entity can hold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArchanError;

/// The role of an entity in the architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Framework,
    CoreLib,
    AppLib,
    AppModule,
    Broker,
    Data,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Framework,
        Self::CoreLib,
        Self::AppLib,
        Self::AppModule,
        Self::Broker,
        Self::Data,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Framework => "framework",
            Self::CoreLib => "core_lib",
            Self::AppLib => "app_lib",
            Self::AppModule => "app_module",
            Self::Broker => "broker",
            Self::Data => "data",
        }
    }

    /// Hubs are expected to be depended upon by many entities.
    #[must_use]
    pub fn is_hub(self) -> bool {
        matches!(self, Self::Broker | Self::AppLib)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ArchanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ArchanError::InvalidCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().ok(), Some(category));
        }
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "plugin".parse::<Category>();
        assert!(matches!(err, Err(ArchanError::InvalidCategory(ref s)) if s == "plugin"));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Category::AppModule).unwrap_or_default();
        assert_eq!(json, "\"app_module\"");
        let back: Result<Category, _> = serde_json::from_str("\"core_lib\"");
        assert_eq!(back.ok(), Some(Category::CoreLib));
    }

    #[test]
    fn test_hubs() {
        assert!(Category::Broker.is_hub());
        assert!(Category::AppLib.is_hub());
        assert!(!Category::AppModule.is_hub());
    }
}
