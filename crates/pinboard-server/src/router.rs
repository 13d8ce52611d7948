//! Axum router construction for the Pinboard server.
//!
//! Assembles all routes (REST + `WebSocket` + HTML fallback) into a
//! single [`Router`].

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the Pinboard server.
///
/// The router includes:
/// - `GET /posts` -- list all posts
/// - `POST /posts` -- create a post (broadcasts to websocket clients)
/// - `GET /posts/{id}` -- single post
/// - `DELETE /posts/{id}` -- delete a post
/// - `GET /socket` -- websocket upgrade for creation events
/// - `GET /` and any unmatched path -- server-rendered HTML page
///
/// Known paths answer 405 for unsupported methods; everything else falls
/// through to the HTML page, as the original catch-all route did.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route(
            "/posts/{id}",
            get(handlers::get_post).delete(handlers::delete_post),
        )
        .route("/socket", get(ws::ws_socket))
        .fallback(handlers::index)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
