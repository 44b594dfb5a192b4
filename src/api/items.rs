//! Item and model API endpoints
//!
//! - POST /items/ - Validate an item body and echo it with a timestamp
//! - GET /items/{item_id} - Bounded path id plus defaulted query string
//! - GET /models/{model_name} - Closed-set path segment

use axum::{
    extract::{rejection::JsonRejection, Path, Query},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::api::ApiError;
use crate::models::{Image, Item, ModelName};
use crate::validation::{self, IntRules, QueryParams, StringRules};

/// Response for a created item: the validated fields plus the moment the
/// echo was produced. An absent image stays visible as null.
#[derive(Debug, Serialize)]
pub struct ItemCreated {
    pub creation_date: String,
    pub name: String,
    pub id: i64,
    pub image: Option<Image>,
}

impl From<Item> for ItemCreated {
    fn from(item: Item) -> Self {
        Self {
            creation_date: Utc::now().to_rfc3339(),
            name: item.name,
            id: item.id,
            image: item.image,
        }
    }
}

/// POST /items/ - Validate an item body and echo it back
///
/// A body axum cannot even deserialize (malformed JSON, wrong content
/// type) is reported through the same rejection envelope as a field
/// violation.
pub async fn create_item(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ItemCreated>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation_error(e.body_text()))?;
    let item = Item::from_body(&payload)?;
    Ok(Json(ItemCreated::from(item)))
}

// Fixed demo table. The path bounds keep every accepted id inside it.
fn item_label(item_id: i64) -> Option<&'static str> {
    match item_id {
        1 => Some("item 1"),
        2 => Some("item 2"),
        _ => None,
    }
}

/// GET /items/{item_id} - Look up a demo item
///
/// The id must be an integer with 1 <= id < 3; `q` defaults to
/// "something" and is bounded at 20 characters. Both parameters are
/// checked before rejecting, so a bad id and an overlong `q` are
/// reported together.
pub async fn get_item_by_id(
    Path(item_id): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<(String, String)>, ApiError> {
    let params = QueryParams::new(pairs);

    let mut errors = Vec::new();
    let item_id = match validation::parse_int("item_id", &item_id)
        .and_then(|id| IntRules::new("item_id").ge(1).lt(3).check(id))
    {
        Ok(id) => Some(id),
        Err(err) => {
            errors.push(err);
            None
        }
    };
    let q = match StringRules::new("q")
        .max_length(20)
        .default_value("something")
        .resolve(params.get("q"))
    {
        Ok(q) => Some(q),
        Err(err) => {
            errors.push(err);
            None
        }
    };
    let (Some(item_id), Some(q)) = (item_id, q) else {
        return Err(errors.into());
    };

    let label = item_label(item_id).ok_or_else(|| {
        ApiError::internal_error(format!("item {item_id} missing from the demo table"))
    })?;
    Ok(Json((label.to_string(), q)))
}

/// GET /models/{model_name} - Resolve a model name from the closed set
///
/// Responds with the (tag, value) pair; for this set the two coincide.
pub async fn get_model(
    Path(model_name): Path<String>,
) -> Result<Json<(ModelName, String)>, ApiError> {
    let model = ModelName::parse("model_name", &model_name)?;
    Ok(Json((model, model.as_str().to_string())))
}
