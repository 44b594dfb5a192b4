//! Closed set of demo machine-learning model names

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::FieldError;

/// The three model names the API recognizes. Matching is by the exact
/// lowercase value; anything else is rejected with the allowed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    pub const ALLOWED: [&'static str; 3] = ["alexnet", "resnet", "lenet"];

    /// Parse a raw path segment, case-sensitively.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, FieldError> {
        match raw {
            "alexnet" => Ok(Self::Alexnet),
            "resnet" => Ok(Self::Resnet),
            "lenet" => Ok(Self::Lenet),
            _ => Err(FieldError::invalid_choice(field, &Self::ALLOWED)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alexnet => "alexnet",
            Self::Resnet => "resnet",
            Self::Lenet => "lenet",
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
