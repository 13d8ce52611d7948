//! In-memory adapter for the [`PostRepository`] port.
//!
//! Backs the HTTP-layer tests so handlers can be exercised without a live
//! database. Ids are assigned monotonically starting at 1, matching the
//! `BIGSERIAL` behavior of the production adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use pinboard_types::Post;
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::repository::PostRepository;

/// Thread-safe in-memory post store.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    posts: BTreeMap<i64, String>,
}

impl MemoryPostStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, DbError> {
        let state = self.state.read().await;
        Ok(state
            .posts
            .iter()
            .map(|(id, body)| Post {
                id: *id,
                body: body.clone(),
            })
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Post, DbError> {
        let state = self.state.read().await;
        state
            .posts
            .get(&id)
            .map(|body| Post {
                id,
                body: body.clone(),
            })
            .ok_or(DbError::PostNotFound(id))
    }

    async fn create(&self, body: &str) -> Result<Post, DbError> {
        let mut state = self.state.write().await;
        let id = state.last_id.checked_add(1).unwrap_or(i64::MAX);
        state.last_id = id;
        state.posts.insert(id, body.to_owned());
        Ok(Post {
            id,
            body: body.to_owned(),
        })
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut state = self.state.write().await;
        Ok(u64::from(state.posts.remove(&id).is_some()))
    }
}
