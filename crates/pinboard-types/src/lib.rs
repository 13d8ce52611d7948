//! Shared type definitions for the Pinboard service.
//!
//! This crate is the single source of truth for the types that cross the
//! wire: the persisted [`Post`] entity served by the REST API and the
//! [`WsPush`] frame pushed to websocket clients whenever a post is created.

use serde::{Deserialize, Serialize};

/// The sole persisted entity: an id/body pair.
///
/// The `id` is assigned by the database on insert and is immutable and
/// unique for the lifetime of the row. Posts are created, read, and
/// deleted; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identifier.
    pub id: i64,
    /// Free-form post body.
    pub body: String,
}

/// The only `messageType` value the server ever produces.
pub const PUSH_NEW: &str = "new";

/// Notification frame pushed to websocket clients when a post is created.
///
/// Wire-only, never persisted. Serializes as
/// `{"messageType":"new","post":{...}}` -- the field rename matters because
/// the browser-side dispatch switches on `messageType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WsPush {
    /// Discriminator for browser-side message dispatch.
    #[serde(rename = "messageType")]
    pub message_type: String,
    /// The newly created post.
    pub post: Post,
}

impl WsPush {
    /// Wrap a freshly created post in a `"new"` push frame.
    pub fn new(post: Post) -> Self {
        Self {
            message_type: PUSH_NEW.to_owned(),
            post,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn ws_push_wire_shape() {
        let push = WsPush::new(Post {
            id: 7,
            body: String::from("hello"),
        });

        let json = serde_json::to_value(&push).unwrap();
        assert_eq!(json["messageType"], "new");
        assert_eq!(json["post"]["id"], 7);
        assert_eq!(json["post"]["body"], "hello");
    }

    #[test]
    fn post_round_trips_through_json() {
        let post = Post {
            id: 1,
            body: String::from("it's a body with 'quotes'"),
        };

        let encoded = serde_json::to_string(&post).unwrap();
        let decoded: Post = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, post);
    }
}
