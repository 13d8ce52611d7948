//! REST endpoint handlers for the Pinboard server.
//!
//! All handlers go through the [`PostRepository`](pinboard_db::PostRepository)
//! held in the shared [`AppState`]; nothing is cached between requests.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/posts` | List all posts |
//! | `POST` | `/posts` | Create a post (and broadcast it) |
//! | `GET` | `/posts/{id}` | Get a single post |
//! | `DELETE` | `/posts/{id}` | Delete a single post |
//! | `GET` | `/` (and fallback) | Server-rendered HTML page |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /posts`.
#[derive(Debug, serde::Deserialize)]
pub struct CreatePostRequest {
    /// Body text for the new post.
    pub body: String,
}

// ---------------------------------------------------------------------------
// GET /posts -- list all posts
// ---------------------------------------------------------------------------

/// Return all posts as a JSON array.
///
/// Order is store-defined; an empty store yields `[]`.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let posts = state.posts.list().await?;
    Ok(Json(posts))
}

// ---------------------------------------------------------------------------
// POST /posts -- create a post
// ---------------------------------------------------------------------------

/// Create a post and broadcast it to connected websocket clients.
///
/// The body is parsed by hand so a malformed payload produces the same
/// structured 400 body as every other failure. The broadcast is
/// fire-and-forget: the HTTP response does not depend on any client
/// being connected.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let request: CreatePostRequest = serde_json::from_str(&body)
        .map_err(|e| ApiError::InvalidBody(format!("invalid JSON body: {e}")))?;

    let post = state.posts.create(&request.body).await?;

    let receivers = state.broadcast_new(&post);
    tracing::debug!(id = post.id, receivers, "Post created");

    Ok(Json(post))
}

// ---------------------------------------------------------------------------
// GET /posts/{id} -- fetch one post
// ---------------------------------------------------------------------------

/// Return a single post by id.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let post = state.posts.get(id).await?;
    Ok(Json(post))
}

// ---------------------------------------------------------------------------
// DELETE /posts/{id} -- delete one post
// ---------------------------------------------------------------------------

/// Delete a single post by id.
///
/// Answers 200 with an empty body on success, 404 when no row was
/// affected.
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let affected = state.posts.delete(id).await?;

    if affected == 0 {
        return Err(ApiError::NotFound(format!("post {id} not found")));
    }

    tracing::debug!(id, "Post deleted");
    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// GET / (and fallback) -- server-rendered HTML page
// ---------------------------------------------------------------------------

/// Serve the HTML page listing current posts.
///
/// The post list is re-queried from the store on every render.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let posts = state.posts.list().await?;
    let html = state.pages.render_index(&posts)?;
    Ok(Html(html))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a post id from a path segment, returning an [`ApiError`] on
/// failure.
///
/// Ids must parse as non-negative integers; anything else is rejected
/// before the store is touched.
fn parse_id(s: &str) -> Result<i64, ApiError> {
    s.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| ApiError::InvalidId(format!("invalid post id: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_non_negative_integers() {
        assert!(matches!(parse_id("0"), Ok(0)));
        assert!(matches!(parse_id("42"), Ok(42)));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("-1").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("").is_err());
    }
}
