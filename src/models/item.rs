//! Item payload and its nested image

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{self, body, FieldError, IntRules};

/// Image attachment carried inside an [`Item`]. The URL must be absolute
/// http(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub name: String,
}

impl Image {
    fn from_body(value: &Value, prefix: &str, errors: &mut Vec<FieldError>) -> Option<Self> {
        let object = body::require_object(value, prefix, errors)?;
        let url = body::require_str(object, "url", prefix, errors).and_then(|url| {
            match validation::check_http_url(&body::field_path(prefix, "url"), &url) {
                Ok(()) => Some(url),
                Err(err) => {
                    errors.push(err);
                    None
                }
            }
        });
        let name = body::require_str(object, "name", prefix, errors);
        match (url, name) {
            (Some(url), Some(name)) => Some(Self { url, name }),
            _ => None,
        }
    }
}

/// Item submitted by clients. The image is optional; when present it is
/// validated in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub id: i64,
    pub image: Option<Image>,
}

impl Item {
    /// Validate an item out of a JSON body, reporting every offending field
    /// (including nested `image.*` paths) in one pass.
    pub fn from_body(value: &Value) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();
        let Some(object) = body::require_object(value, "", &mut errors) else {
            return Err(errors);
        };
        let name = body::require_str(object, "name", "", &mut errors);
        let id = body::require_i64(object, "id", "", &mut errors).and_then(|id| {
            match IntRules::new("id").ge(1).check(id) {
                Ok(id) => Some(id),
                Err(err) => {
                    errors.push(err);
                    None
                }
            }
        });
        let image = match object.get("image") {
            None | Some(Value::Null) => None,
            Some(image_value) => Image::from_body(image_value, "image", &mut errors),
        };
        match (name, id) {
            (Some(name), Some(id)) if errors.is_empty() => Ok(Self { name, id, image }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ConstraintRule;
    use serde_json::json;

    #[test]
    fn test_from_body_accepts_item_without_image() {
        let item = Item::from_body(&json!({"name": "hammer", "id": 1})).unwrap();
        assert_eq!(item.name, "hammer");
        assert_eq!(item.id, 1);
        assert!(item.image.is_none());
    }

    #[test]
    fn test_from_body_accepts_item_with_image() {
        let value = json!({
            "name": "hammer",
            "id": 7,
            "image": {"url": "https://cdn.example.com/hammer.png", "name": "hammer.png"}
        });
        let item = Item::from_body(&value).unwrap();
        let image = item.image.unwrap();
        assert_eq!(image.url, "https://cdn.example.com/hammer.png");
        assert_eq!(image.name, "hammer.png");
    }

    #[test]
    fn test_from_body_coerces_string_id() {
        let item = Item::from_body(&json!({"name": "hammer", "id": "10"})).unwrap();
        assert_eq!(item.id, 10);
    }

    #[test]
    fn test_from_body_rejects_id_below_one() {
        let errors = Item::from_body(&json!({"name": "hammer", "id": 0})).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "id");
        assert_eq!(errors[0].rule, ConstraintRule::Ge);
    }

    #[test]
    fn test_from_body_reports_nested_image_paths() {
        let value = json!({"name": "hammer", "id": 1, "image": {"url": "not a url"}});
        let errors = Item::from_body(&value).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["image.url", "image.name"]);
        assert_eq!(errors[0].rule, ConstraintRule::InvalidUrl);
    }

    #[test]
    fn test_from_body_collects_top_level_and_nested_errors_together() {
        let value = json!({"id": 0, "image": {"url": "https://ok.example.com/i.png"}});
        let errors = Item::from_body(&value).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "id", "image.name"]);
    }

    #[test]
    fn test_null_image_counts_as_absent() {
        let item = Item::from_body(&json!({"name": "hammer", "id": 1, "image": null})).unwrap();
        assert!(item.image.is_none());
    }
}
