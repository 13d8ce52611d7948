//! Repository port for post persistence.
//!
//! The HTTP layer depends on this trait rather than on a concrete store,
//! so handlers can be exercised against the in-memory adapter in tests
//! while production wires in the `PostgreSQL` adapter.

use async_trait::async_trait;
use pinboard_types::Post;

use crate::error::DbError;

/// Post persistence contract.
///
/// Every read re-queries the store; implementations must not cache.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Return all posts in store-defined order.
    ///
    /// No ordering is guaranteed and callers must not rely on one. An
    /// empty store yields an empty vec.
    async fn list(&self) -> Result<Vec<Post>, DbError>;

    /// Look up a single post by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::PostNotFound`] when no row matches.
    async fn get(&self, id: i64) -> Result<Post, DbError>;

    /// Insert a new post and return it with its store-assigned id.
    async fn create(&self, body: &str) -> Result<Post, DbError>;

    /// Delete a post by id, returning the number of rows affected.
    ///
    /// Deleting an absent id is not an error; it returns 0.
    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}
