//! Post repository
//!
//! Lookup operations for posts.
//!
//! This module provides:
//! - `PostRepository` trait defining the interface handlers depend on
//! - `InMemoryPostRepository` backed by a fixed table seeded at startup

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::models::Post;

/// Post repository trait
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Get post by ID; absent IDs are `None`, not an error
    async fn get_by_id(&self, id: i64) -> Option<Post>;

    /// List all posts in ascending ID order
    async fn list(&self) -> Vec<Post>;
}

/// In-memory post repository
///
/// Records live in a `BTreeMap` keyed by ID so listings come out in a
/// deterministic order.
pub struct InMemoryPostRepository {
    posts: BTreeMap<i64, Post>,
}

impl InMemoryPostRepository {
    /// Create a repository over the given records
    pub fn new(posts: impl IntoIterator<Item = Post>) -> Self {
        Self {
            posts: posts.into_iter().map(|post| (post.id, post)).collect(),
        }
    }

    /// Create a repository holding the demo table
    pub fn seeded() -> Self {
        Self::new([Post {
            id: 1,
            title: "first post".to_string(),
            content: "This is the first post!".to_string(),
        }])
    }

    /// Create a boxed, seeded repository for use with dependency injection
    pub fn boxed() -> Arc<dyn PostRepository> {
        Arc::new(Self::seeded())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn get_by_id(&self, id: i64) -> Option<Post> {
        self.posts.get(&id).cloned()
    }

    async fn list(&self) -> Vec<Post> {
        self.posts.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_table_holds_the_first_post() {
        let repo = InMemoryPostRepository::seeded();
        let post = repo.get_by_id(1).await.expect("post 1 is seeded");
        assert_eq!(post.title, "first post");
        assert_eq!(post.content, "This is the first post!");
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none() {
        let repo = InMemoryPostRepository::seeded();
        assert!(repo.get_by_id(999).await.is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryPostRepository::new([
            Post {
                id: 3,
                title: "third".to_string(),
                content: "c".to_string(),
            },
            Post {
                id: 1,
                title: "first".to_string(),
                content: "a".to_string(),
            },
        ]);
        let ids: Vec<i64> = repo.list().await.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
