//! Author API endpoints
//!
//! - GET /authors/ - Full table keyed by id
//! - GET /authors/{author_id} - Point lookup; absent ids are null

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::{ApiError, AppState};
use crate::models::Author;
use crate::validation;

/// GET /authors/ - The whole author table, keyed by stringified id
pub async fn list_authors(State(state): State<AppState>) -> Json<BTreeMap<i64, Author>> {
    let authors = state.authors.list().await;
    Json(authors.into_iter().map(|author| (author.id, author)).collect())
}

/// GET /authors/{author_id} - Point lookup
///
/// A non-integer id is a structured rejection, not a bare client error.
pub async fn get_author_details(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> Result<Json<Option<Author>>, ApiError> {
    let author_id = validation::parse_int("author_id", &author_id)?;
    Ok(Json(state.authors.get_by_id(author_id).await))
}
