//! Post API endpoints
//!
//! - GET /posts/ - Full table keyed by id
//! - POST /posts/ - Validate an embedded post body and echo it
//! - GET /posts/{post_id} - Point lookup; absent ids are null

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

use crate::api::{ApiError, AppState};
use crate::models::Post;
use crate::validation::{self, body, FieldError};

/// GET /posts/ - The whole post table
///
/// Keys are record ids; JSON objects have string keys, so numeric ids
/// arrive stringified.
pub async fn list_posts(State(state): State<AppState>) -> Json<BTreeMap<i64, Post>> {
    let posts = state.posts.list().await;
    Json(posts.into_iter().map(|post| (post.id, post)).collect())
}

/// POST /posts/ - Validate and echo a post
///
/// The payload arrives wrapped under a single `post` key; field errors are
/// reported under `post.*` paths. Nothing is written to the table.
pub async fn create_post(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation_error(e.body_text()))?;
    let mut errors = Vec::new();
    let Some(object) = body::require_object(&payload, "", &mut errors) else {
        return Err(errors.into());
    };
    let post_value = match object.get("post") {
        None | Some(Value::Null) => return Err(FieldError::missing("post").into()),
        Some(value) => value,
    };
    let post = Post::from_body(post_value, "post")?;
    Ok(Json(post))
}

/// GET /posts/{post_id} - Point lookup
///
/// A non-integer id is a structured rejection, not a bare client error.
pub async fn get_post_details(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Option<Post>>, ApiError> {
    let post_id = validation::parse_int("post_id", &post_id)?;
    Ok(Json(state.posts.get_by_id(post_id).await))
}
