//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fittrack_shared::types::ErrorResponse;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
///
/// Only `NotFound` is surfaced with a descriptive message. A malformed
/// record id is an id-format failure of the store, not a client-side
/// validation error, and collapses into the generic server error like
/// any other store failure.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Malformed record id")]
    InvalidId(#[from] uuid::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::InvalidId(err) => {
                error!("Malformed record id: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("User Not Found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case(ApiError::Database(sqlx::Error::PoolClosed))]
    #[case(ApiError::Internal(anyhow::anyhow!("boom")))]
    #[case(ApiError::InvalidId(uuid::Uuid::try_parse("not-a-uuid").unwrap_err()))]
    fn test_server_errors_map_to_500(#[case] error: ApiError) {
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_server_error_body_is_opaque() {
        let error = ApiError::Database(sqlx::Error::PoolClosed);
        let response = error.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.error, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_not_found_body_carries_reason() {
        let error = ApiError::NotFound("Weight Record Not Found".to_string());
        let response = error.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.error, "Weight Record Not Found");
    }
}
