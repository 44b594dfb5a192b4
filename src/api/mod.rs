//! API layer - HTTP handlers and routing
//!
//! This module contains all HTTP endpoints for the Vitrine demo API:
//! - Greeting endpoints (query validation, defaults, aliased names)
//! - Item and model endpoints (path/query bounds, JSON body validation)
//! - Post and author endpoints (in-memory lookups)
//! - User registration endpoints (response shape projection)
//! - File endpoints (disk reads and multipart uploads)

pub mod authors;
pub mod error;
pub mod files;
pub mod greetings;
pub mod items;
pub mod posts;
pub mod users;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::repo::{AuthorRepository, PostRepository};

pub use error::ApiError;

/// Application state containing the shared lookup tables
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub authors: Arc<dyn AuthorRepository>,
}

/// Build the complete router with middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greetings::root))
        .route("/test", get(greetings::test_flag))
        .route("/greet/", get(greetings::greet))
        .route("/greets/", get(greetings::greet_many))
        .route("/say-hello/", get(greetings::say_hello))
        .route("/items/", post(items::create_item))
        .route("/items/{item_id}", get(items::get_item_by_id))
        .route("/models/{model_name}", get(items::get_model))
        .route("/posts/", get(posts::list_posts).post(posts::create_post))
        .route("/posts/{post_id}", get(posts::get_post_details))
        .route("/authors/", get(authors::list_authors))
        .route("/authors/{author_id}", get(authors::get_author_details))
        .route("/users/register", post(users::register))
        .route("/users/register/out", post(users::register_out))
        .route("/login/", post(users::login))
        .route("/files/{*file_path}", get(files::get_file))
        .route("/uploadfiles/", post(files::upload_files))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
