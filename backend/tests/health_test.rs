//! Tests for health check endpoints
//!
//! /health and /health/live never touch the database, so these run
//! against a lazily-connected pool without one.

mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use fittrack_backend::{routes, state::AppState};
use sqlx::PgPool;
use tower::ServiceExt;

fn offline_app() -> axum::Router {
    let config = common::test_config();
    let pool = PgPool::connect_lazy(&config.database.url).unwrap();
    routes::create_router(AppState::new(pool, config))
}

#[tokio::test]
async fn test_health_returns_200_without_database() {
    let app = offline_app();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_returns_200_without_database() {
    let app = offline_app();

    let response = app
        .oneshot(Request::get("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_returns_200_with_database() {
    let app = common::TestApp::new().await;

    let (status, response) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["status"], "ready");
    assert_eq!(response["database"], "healthy");
}
