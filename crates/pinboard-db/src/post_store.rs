//! `PostgreSQL` adapter for the [`PostRepository`] port.
//!
//! All statements bind their values as parameters; nothing from a request
//! is ever interpolated into SQL text.

use async_trait::async_trait;
use pinboard_types::Post;
use sqlx::PgPool;

use crate::error::DbError;
use crate::repository::PostRepository;

/// Operations on the `posts` table.
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for the `posts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct PostRow {
    /// Store-assigned identifier.
    id: i64,
    /// Post body text.
    body: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            body: row.body,
        }
    }
}

#[async_trait]
impl PostRepository for PgPostStore {
    async fn list(&self) -> Result<Vec<Post>, DbError> {
        // Order is intentionally left to the store.
        let rows = sqlx::query_as::<_, PostRow>(r"SELECT id, body FROM posts")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Post, DbError> {
        let row = sqlx::query_as::<_, PostRow>(r"SELECT id, body FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Post::from).ok_or(DbError::PostNotFound(id))
    }

    async fn create(&self, body: &str) -> Result<Post, DbError> {
        let row = sqlx::query_as::<_, PostRow>(
            r"INSERT INTO posts (body) VALUES ($1) RETURNING id, body",
        )
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = row.id, "Inserted post");
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query(r"DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
