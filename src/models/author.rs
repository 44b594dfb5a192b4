//! Author entity

use serde::{Deserialize, Serialize};

/// A post author held in the in-memory lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}
