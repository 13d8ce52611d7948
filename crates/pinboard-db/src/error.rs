//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`]. The missing-row case for
//! get-by-id is a dedicated variant so the HTTP layer can answer 404
//! instead of folding it into a generic store failure.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// No post exists with the requested id.
    #[error("post not found: {0}")]
    PostNotFound(i64),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
