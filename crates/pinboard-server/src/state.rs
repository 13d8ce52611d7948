//! Shared application state for the Pinboard server.
//!
//! [`AppState`] holds the post repository and the broadcast channel that
//! carries creation events to connected websocket clients. It is wrapped
//! in [`Arc`] and injected into handlers via Axum's `State` extractor --
//! the dependency-injection replacement for process-wide handles.

use std::sync::Arc;

use pinboard_db::PostRepository;
use pinboard_types::{Post, WsPush};
use tokio::sync::broadcast;

use crate::page::PageRenderer;

/// Capacity of the broadcast channel for creation events.
///
/// If a subscriber falls behind by more than this many messages it will
/// receive a [`broadcast::error::RecvError::Lagged`] and skip to the
/// newest message.
const BROADCAST_CAPACITY: usize = 256;

/// Shared state for the Axum application.
///
/// The broadcast sender is used to push creation events to all connected
/// websocket clients; each connection task holds its own receiver, so a
/// new connection never displaces an existing one.
#[derive(Clone)]
pub struct AppState {
    /// The post repository. Safe for concurrent use; every read
    /// re-queries the store.
    pub posts: Arc<dyn PostRepository>,
    /// Broadcast sender for creation events.
    pub tx: broadcast::Sender<WsPush>,
    /// Renderer for the HTML index page.
    pub pages: PageRenderer,
}

impl AppState {
    /// Create a new application state around a post repository.
    pub fn new(posts: Arc<dyn PostRepository>, pages: PageRenderer) -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { posts, tx, pages }
    }

    /// Subscribe to the creation-event broadcast channel.
    ///
    /// Returns a receiver that will yield one [`WsPush`] per created post.
    pub fn subscribe(&self) -> broadcast::Receiver<WsPush> {
        self.tx.subscribe()
    }

    /// Publish a creation event to all connected clients.
    ///
    /// Returns the number of receivers that received the message.
    /// Returns 0 if no clients are connected -- that is not an error and
    /// must never fail the originating HTTP request.
    pub fn broadcast_new(&self, post: &Post) -> usize {
        // send returns Err only when there are zero receivers,
        // which is normal when no websocket clients are connected.
        self.tx.send(WsPush::new(post.clone())).unwrap_or(0)
    }
}
