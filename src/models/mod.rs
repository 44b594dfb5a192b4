//! Data models
//!
//! This module contains the data structures the API serves and validates:
//! - Entities held in the in-memory lookup tables (Post, Author)
//! - Payload types validated out of JSON bodies (Item, Image)
//! - The closed set of demo machine-learning model names (ModelName)

mod author;
mod item;
mod model_name;
mod post;

pub use author::Author;
pub use item::{Image, Item};
pub use model_name::ModelName;
pub use post::Post;
