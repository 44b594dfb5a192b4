//! Author repository
//!
//! Lookup operations for authors, mirroring the post repository shape:
//! a trait for handlers plus an in-memory table seeded at startup.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::models::Author;

/// Author repository trait
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Get author by ID; absent IDs are `None`, not an error
    async fn get_by_id(&self, id: i64) -> Option<Author>;

    /// List all authors in ascending ID order
    async fn list(&self) -> Vec<Author>;
}

/// In-memory author repository
pub struct InMemoryAuthorRepository {
    authors: BTreeMap<i64, Author>,
}

impl InMemoryAuthorRepository {
    /// Create a repository over the given records
    pub fn new(authors: impl IntoIterator<Item = Author>) -> Self {
        Self {
            authors: authors.into_iter().map(|author| (author.id, author)).collect(),
        }
    }

    /// Create a repository holding the demo table
    pub fn seeded() -> Self {
        Self::new([Author {
            id: 1,
            first_name: "Homayoon".to_string(),
            last_name: "Alimohammadi".to_string(),
        }])
    }

    /// Create a boxed, seeded repository for use with dependency injection
    pub fn boxed() -> Arc<dyn AuthorRepository> {
        Arc::new(Self::seeded())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn get_by_id(&self, id: i64) -> Option<Author> {
        self.authors.get(&id).cloned()
    }

    async fn list(&self) -> Vec<Author> {
        self.authors.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_table_holds_author_one() {
        let repo = InMemoryAuthorRepository::seeded();
        let author = repo.get_by_id(1).await.expect("author 1 is seeded");
        assert_eq!(author.first_name, "Homayoon");
        assert_eq!(author.last_name, "Alimohammadi");
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none() {
        let repo = InMemoryAuthorRepository::seeded();
        assert!(repo.get_by_id(42).await.is_none());
    }

    #[tokio::test]
    async fn test_list_returns_every_record() {
        let repo = InMemoryAuthorRepository::seeded();
        assert_eq!(repo.list().await.len(), 1);
    }
}
