//! Integration tests for exercise log endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_add_exercise_log_success() {
    let app = common::TestApp::new().await;
    let user_id = app.register_user("Ana").await;

    let body = json!({
        "userId": user_id,
        "exerciseType": "running",
        "duration": 30.0,
        "date": "2024-01-02"
    });

    let (status, response) = app.post("/addExerciseLog", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Exercise Log Saved Successfully");
    assert_eq!(response["log"]["exerciseType"], "running");
    assert_eq!(response["log"]["duration"], 30.0);
    assert_eq!(response["log"]["date"], "2024-01-02");
    assert_eq!(response["log"]["userId"], user_id.as_str());

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_add_exercise_log_missing_owner_is_not_found() {
    let app = common::TestApp::new().await;

    let body = json!({
        "userId": "00000000-0000-0000-0000-000000000000",
        "exerciseType": "running",
        "duration": 30.0,
        "date": "2024-01-02"
    });

    let (status, response) = app.post("/addExerciseLog", &body.to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "User Not Found");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_exercise_history_unknown_owner_is_empty() {
    let app = common::TestApp::new().await;

    let (status, response) = app
        .get("/exerciseHistory/00000000-0000-0000-0000-000000000000")
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["exerciseLogs"].as_array().unwrap().len(), 0);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_exercise_log_touches_only_duration() {
    let app = common::TestApp::new().await;
    let user_id = app.register_user("Ana").await;

    let body = json!({
        "userId": user_id,
        "exerciseType": "cycling",
        "duration": 45.0,
        "date": "2024-01-03"
    });
    let (_, response) = app.post("/addExerciseLog", &body.to_string()).await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let log_id = response["log"]["id"].as_str().unwrap().to_string();

    let (status, response) = app
        .put(
            &format!("/updateExerciseLog/{}", log_id),
            &json!({ "duration": 60.0 }).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Exercise Log Updated Successfully");
    assert_eq!(response["log"]["duration"], 60.0);
    // Everything else is untouched
    assert_eq!(response["log"]["exerciseType"], "cycling");
    assert_eq!(response["log"]["date"], "2024-01-03");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_exercise_log_then_history_empty() {
    let app = common::TestApp::new().await;
    let user_id = app.register_user("Ana").await;

    let body = json!({
        "userId": user_id,
        "exerciseType": "rowing",
        "duration": 20.0,
        "date": "2024-01-04"
    });
    let (_, response) = app.post("/addExerciseLog", &body.to_string()).await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let log_id = response["log"]["id"].as_str().unwrap().to_string();

    let (status, response) = app.delete(&format!("/deleteExerciseLog/{}", log_id)).await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Exercise Log Deleted Successfully");

    let (status, _) = app.delete(&format!("/deleteExerciseLog/{}", log_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, response) = app.get(&format!("/exerciseHistory/{}", user_id)).await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["exerciseLogs"].as_array().unwrap().len(), 0);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_unknown_log_is_not_found() {
    let app = common::TestApp::new().await;

    let (status, response) = app
        .put(
            "/updateExerciseLog/00000000-0000-0000-0000-000000000000",
            &json!({ "duration": 10.0 }).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Exercise Log Not Found");

    app.cleanup().await;
}
