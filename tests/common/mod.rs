//! Shared plumbing for the integration tests: an in-memory database with
//! the real migrations applied, and helpers for driving the router without
//! a listener.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use budget_diary::backend::{app, AppState};
use budget_diary::database::db::queries::category;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret";

pub async fn test_pool() -> Pool<Sqlite> {
    // One connection: every handle must see the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    category::seed_default_categories(&pool)
        .await
        .expect("seed categories");

    pool
}

pub async fn test_app() -> Router {
    let pool = test_pool().await;
    let state = AppState {
        db: pool,
        pin_secret: TEST_SECRET.to_string(),
    };
    app(state)
}

/// Sends a form-encoded request and returns the decoded envelope. Every
/// business outcome is an HTTP 200; the envelope status carries the result.
pub async fn send_form(app: &Router, method: &str, uri: &str, body: &str) -> serde_json::Value {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json envelope")
}

pub async fn send(app: &Router, method: &str, uri: &str) -> serde_json::Value {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json envelope")
}

/// Registers a user through the boundary and returns its id.
pub async fn add_user(app: &Router, discord_username: &str, pin: &str) -> i64 {
    let envelope = send_form(
        app,
        "POST",
        "/user/add",
        &format!("discord_username={discord_username}&pin={pin}"),
    )
    .await;
    assert_eq!(envelope["status"], "Success");
    envelope["content"]["id"].as_i64().expect("user id")
}
