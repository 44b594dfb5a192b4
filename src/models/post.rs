//! Post entity

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{body, FieldError};

/// A blog post held in the in-memory lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Validate a post out of a JSON value, reporting every offending field
    /// in one pass. `prefix` is the body path the value sits under (e.g.
    /// `post` when the payload arrives wrapped).
    pub fn from_body(value: &Value, prefix: &str) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();
        let Some(object) = body::require_object(value, prefix, &mut errors) else {
            return Err(errors);
        };
        let id = body::require_i64(object, "id", prefix, &mut errors);
        let title = body::require_str(object, "title", prefix, &mut errors);
        let content = body::require_str(object, "content", prefix, &mut errors);
        match (id, title, content) {
            (Some(id), Some(title), Some(content)) if errors.is_empty() => Ok(Self {
                id,
                title,
                content,
            }),
            _ => Err(errors),
        }
    }
}
