//! Error types for the Pinboard service binary.
//!
//! [`ServiceError`] is the top-level error type that wraps all possible
//! failure modes during startup. Every variant is fatal: the process
//! logs the error and exits non-zero before serving.

/// Top-level error for the Pinboard service binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration loading failed (missing or invalid env values).
    #[error("config error: {0}")]
    Config(String),

    /// Database connection or migration failed.
    #[error("database error: {source}")]
    Database {
        /// The underlying data-layer error.
        #[from]
        source: pinboard_db::DbError,
    },

    /// The embedded page template failed to compile.
    #[error("page error: {source}")]
    Page {
        /// The underlying template error.
        #[from]
        source: pinboard_server::PageError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: pinboard_server::ServerError,
    },
}
