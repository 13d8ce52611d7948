//! Integration tests for the Pinboard REST API and page rendering.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. The in-memory repository adapter stands in for
//! `PostgreSQL`, so handler logic, routing, status codes, and the
//! broadcast side effect are validated without a live database.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pinboard_db::MemoryPostStore;
use pinboard_server::router::build_router;
use pinboard_server::state::AppState;
use pinboard_server::PageRenderer;
use serde_json::Value;
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    let posts = Arc::new(MemoryPostStore::new());
    let pages = PageRenderer::new().unwrap();
    Arc::new(AppState::new(posts, pages))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a new post through the router and return the created JSON object.
async fn create_post(state: &Arc<AppState>, body: &str) -> Value {
    let router = build_router(Arc::clone(state));
    let payload = serde_json::json!({ "body": body }).to_string();

    let response = router
        .oneshot(
            Request::post("/posts")
                .header("content-type", "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_list_posts_empty_store() {
    let state = make_test_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/posts").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let state = make_test_state();

    let created = create_post(&state, "hello").await;
    assert_eq!(created["body"], "hello");
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);

    let router = build_router(state);
    let response = router
        .oneshot(
            Request::get(format!("/posts/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_to_json(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_post_is_404() {
    let state = make_test_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/posts/999999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 404);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_get_non_numeric_id_is_400() {
    let state = make_test_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/posts/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_400() {
    let state = make_test_state();
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::post("/posts")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_delete_missing_post_is_404() {
    let state = make_test_state();
    let router = build_router(state);

    let response = router
        .oneshot(
            Request::delete("/posts/999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let state = make_test_state();

    let created = create_post(&state, "doomed").await;
    let id = created["id"].as_i64().unwrap();

    let response = build_router(Arc::clone(&state))
        .oneshot(
            Request::delete(format!("/posts/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = build_router(state)
        .oneshot(
            Request::get(format!("/posts/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_broadcasts_one_push_per_subscriber() {
    let state = make_test_state();
    let mut rx = state.subscribe();

    let created = create_post(&state, "broadcast me").await;

    let push = rx.recv().await.unwrap();
    assert_eq!(push.message_type, "new");
    assert_eq!(push.post.body, "broadcast me");
    assert_eq!(push.post.id, created["id"].as_i64().unwrap());

    // Exactly one frame per creation.
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_create_succeeds_with_no_subscribers() {
    let state = make_test_state();

    // No websocket client anywhere; the POST must still succeed.
    let created = create_post(&state, "into the void").await;
    assert!(created["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_index_returns_html() {
    let state = make_test_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_index_escapes_post_bodies() {
    let state = make_test_state();
    create_post(&state, "<script>alert(1)</script>").await;

    let router = build_router(state);
    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(!html.contains("<script>alert(1)"));
    assert!(html.contains("&lt;script&gt;alert(1)"));
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_page() {
    let state = make_test_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/anything/else").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_unsupported_method_on_known_path_is_405() {
    let state = make_test_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::delete("/posts").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
