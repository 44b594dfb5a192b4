//! In-memory lookup tables
//!
//! Repository pattern for the records the API serves. Each repository
//! exposes a trait the handlers depend on plus an in-memory implementation
//! seeded with the demo records at startup. Tables are never mutated after
//! construction, so identical requests always produce identical responses.

pub mod author;
pub mod post;

pub use author::{AuthorRepository, InMemoryAuthorRepository};
pub use post::{InMemoryPostRepository, PostRepository};
