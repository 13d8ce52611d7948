//! HTTP and `WebSocket` server for the Pinboard service.
//!
//! This crate provides an Axum server that exposes:
//!
//! - **REST endpoints** for creating, listing, fetching, and deleting posts
//! - **`WebSocket` endpoint** (`/socket`) that pushes a JSON
//!   [`WsPush`](pinboard_types::WsPush) frame to every connected client
//!   whenever a post is created, via [`tokio::sync::broadcast`]
//! - **Server-rendered HTML page** (`GET /` and any unmatched path) that
//!   lists current posts and bootstraps the browser-side websocket and
//!   fetch calls
//!
//! # Architecture
//!
//! Handlers receive an [`AppState`] holding the post repository and the
//! broadcast sender -- explicit dependency injection in place of
//! process-wide handles. Each websocket connection gets its own receiver
//! and its own writer task, so creation events fan out to all clients and
//! no two tasks ever write to the same connection.
//!
//! [`AppState`]: state::AppState

pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod server;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use page::{PageError, PageRenderer};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
