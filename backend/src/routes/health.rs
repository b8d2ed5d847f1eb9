//! Health check endpoints
//!
//! /health and /health/live answer from the process alone; /health/ready
//! additionally pings the database and reports 503 when it is unreachable.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: None,
        }
    }
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// Liveness probe - always OK while the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}

/// Readiness probe - checks the database before accepting traffic
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match db::health_check(state.db()).await {
        Ok(()) => {
            let mut response = HealthResponse::new("ready");
            response.database = Some("healthy".to_string());
            Ok(Json(response))
        }
        Err(e) => {
            let mut response = HealthResponse::new("not_ready");
            response.database = Some(e.to_string());
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
        }
    }
}
