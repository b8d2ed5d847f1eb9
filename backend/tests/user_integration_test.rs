//! Integration tests for user registration and profile endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_returns_created_user() {
    let app = common::TestApp::new().await;

    let body = json!({
        "name": "Ana",
        "age": 30,
        "gender": "F"
    });

    let (status, response) = app.post("/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "User Registered Successfully");
    assert_eq!(response["user"]["name"], "Ana");
    assert_eq!(response["user"]["age"], 30);
    assert_eq!(response["user"]["gender"], "F");
    assert!(!response["user"]["id"].as_str().unwrap().is_empty());

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_assigns_fresh_ids() {
    let app = common::TestApp::new().await;

    // Same name twice on purpose: no uniqueness check exists
    let first = app.register_user("Sam").await;
    let second = app.register_user("Sam").await;

    assert_ne!(first, second);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_profile_round_trip() {
    let app = common::TestApp::new().await;
    let user_id = app.register_user("Ana").await;

    let (status, response) = app.get(&format!("/profile/{}", user_id)).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["user"]["id"], user_id.as_str());
    assert_eq!(response["user"]["name"], "Ana");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_profile_unknown_id_is_not_found() {
    let app = common::TestApp::new().await;

    // Well-formed id that was never issued
    let (status, response) = app
        .get("/profile/00000000-0000-0000-0000-000000000000")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "User Not Found");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_profile_malformed_id_is_server_error() {
    let app = common::TestApp::new().await;

    let (status, response) = app.get("/profile/not-a-uuid").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Internal Server Error");

    app.cleanup().await;
}
