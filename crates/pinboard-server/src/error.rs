//! Error types for the HTTP layer.
//!
//! [`ApiError`] unifies all request-scoped failure modes into a single
//! enum converted into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! 4xx/5xx response carries the same structured JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pinboard_db::DbError;

use crate::page::PageError;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The path id did not parse as a non-negative integer.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// The request body was not valid JSON of the expected shape.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A store operation failed.
    #[error("store error: {0}")]
    Database(#[from] DbError),

    /// The HTML page could not be rendered.
    #[error("page error: {0}")]
    Page(#[from] PageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Database(DbError::PostNotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("post {id} not found"))
            }
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidId(msg) | Self::InvalidBody(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Database(e) => {
                // Request-scoped, never fatal. Details go to the log, not
                // the client.
                tracing::error!(error = %e, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("store operation failed"),
                )
            }
            Self::Page(e) => {
                tracing::error!(error = %e, "page render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("page render failed"),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
