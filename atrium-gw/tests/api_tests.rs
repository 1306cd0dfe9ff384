//! Integration tests for the gateway write paths
//!
//! Covers the revalidation webhook (authentication, path/tag mapping, no-op
//! behavior for unknown types) and contact-form validation. The WordPress
//! base URL points at an unreachable port so no test depends on a live CMS.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot` method

use atrium_common::cache::page_key;
use atrium_common::config::Config;
use atrium_gw::{build_router, AppState};

const SECRET: &str = "test-secret";

fn test_config(secret: Option<&str>) -> Config {
    Config {
        // Port 9 (discard) is never listening; fetches fail fast
        wordpress_api_url: "http://127.0.0.1:9".to_string(),
        revalidation_secret: secret.map(String::from),
        resend_api_key: None,
        contact_from: "Test <noreply@test.example>".to_string(),
        contact_to: "inbox@test.example".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

fn setup_state(secret: Option<&str>) -> AppState {
    AppState::new(test_config(secret))
}

fn post_json(uri: &str, secret: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(secret) = secret {
        builder = builder.header("x-revalidation-secret", secret);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_router(setup_state(Some(SECRET)));

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "atrium-gw");
    assert!(body["version"].is_string());
}

// =============================================================================
// Revalidation Webhook: Authentication
// =============================================================================

#[tokio::test]
async fn test_revalidate_wrong_secret_is_rejected() {
    let state = setup_state(Some(SECRET));
    // Preload a cache entry that a successful call would purge
    state.cache.insert(
        &page_key("/about"),
        json!({"heading": "About"}),
        Duration::from_secs(60),
        &[],
    );
    let app = build_router(state.clone());

    let request = post_json(
        "/api/revalidate",
        Some("wrong"),
        json!({"post_type": "page", "slug": "about"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "Invalid secret");

    // Zero invalidations were performed
    assert!(state.cache.get(&page_key("/about")).is_some());
}

#[tokio::test]
async fn test_revalidate_missing_header_is_rejected() {
    let app = build_router(setup_state(Some(SECRET)));

    let request = post_json("/api/revalidate", None, json!({"post_type": "post"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_revalidate_unconfigured_secret_is_a_server_error() {
    let app = build_router(setup_state(None));

    let request = post_json(
        "/api/revalidate",
        Some(SECRET),
        json!({"post_type": "post"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "Error revalidating");
}

// =============================================================================
// Revalidation Webhook: Mapping
// =============================================================================

#[tokio::test]
async fn test_revalidate_page_maps_to_single_path() {
    let app = build_router(setup_state(Some(SECRET)));

    let request = post_json(
        "/api/revalidate",
        Some(SECRET),
        json!({"post_type": "page", "slug": "about"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["revalidated"], true);
    assert_eq!(body["paths"], json!(["/about"]));
    assert!(body["now"].is_i64());
}

#[tokio::test]
async fn test_revalidate_post_includes_detail_path() {
    let app = build_router(setup_state(Some(SECRET)));

    let request = post_json(
        "/api/revalidate",
        Some(SECRET),
        json!({"post_type": "post", "slug": "my-post"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    let paths = body["paths"].as_array().unwrap();
    assert!(paths.contains(&json!("/blog")));
    assert!(paths.contains(&json!("/blog/my-post")));
}

#[tokio::test]
async fn test_revalidate_purges_paths_and_tags() {
    let state = setup_state(Some(SECRET));
    state.cache.insert(
        &page_key("/blog"),
        json!({"posts": []}),
        Duration::from_secs(60),
        &[],
    );
    state.cache.insert(
        "/posts?per_page=100",
        json!([]),
        Duration::from_secs(60),
        &["blog-posts".to_string()],
    );
    state.cache.insert(
        "/stat?per_page=100",
        json!([]),
        Duration::from_secs(60),
        &["stats".to_string()],
    );
    let app = build_router(state.clone());

    let request = post_json(
        "/api/revalidate",
        Some(SECRET),
        json!({"post_type": "post", "slug": "my-post"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Page view-model and tagged fetch entry are gone; unrelated entry stays
    assert!(state.cache.get(&page_key("/blog")).is_none());
    assert!(state.cache.get("/posts?per_page=100").is_none());
    assert!(state.cache.get("/stat?per_page=100").is_some());
}

#[tokio::test]
async fn test_revalidate_unknown_type_is_a_noop_success() {
    let state = setup_state(Some(SECRET));
    state.cache.insert(
        &page_key("/"),
        json!({"hero": {}}),
        Duration::from_secs(60),
        &[],
    );
    let app = build_router(state.clone());

    let request = post_json(
        "/api/revalidate",
        Some(SECRET),
        json!({"post_type": "navigation_menu"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["revalidated"], true);
    assert_eq!(body["paths"], json!([]));
    assert!(state.cache.get(&page_key("/")).is_some());
}

// =============================================================================
// Contact Endpoint
// =============================================================================

#[tokio::test]
async fn test_contact_missing_name_is_rejected() {
    let app = build_router(setup_state(Some(SECRET)));

    let request = post_json(
        "/api/contact",
        None,
        json!({"email": "a@b.com", "message": "hi"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_contact_blank_fields_count_as_missing() {
    let app = build_router(setup_state(Some(SECRET)));

    let request = post_json(
        "/api/contact",
        None,
        json!({"name": "  ", "email": "a@b.com", "message": ""}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("name"));
    assert!(error.contains("message"));
    assert!(!error.contains("email"));
}

#[tokio::test]
async fn test_contact_without_mail_config_is_a_server_error() {
    // resend_api_key is None in the test config, so no mailer exists
    let app = build_router(setup_state(Some(SECRET)));

    let request = post_json(
        "/api/contact",
        None,
        json!({"name": "Ada", "email": "a@b.com", "message": "hi"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    assert!(body["error"].is_string());
}
