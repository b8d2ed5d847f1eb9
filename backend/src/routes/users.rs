//! User registration and profile API routes

use crate::error::ApiError;
use crate::repositories::{CreateUser, UserRecord, UserRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use fittrack_shared::types;
use uuid::Uuid;

fn to_wire(user: UserRecord) -> types::User {
    types::User {
        id: user.id.to_string(),
        name: user.name,
        age: user.age,
        gender: user.gender,
    }
}

/// POST /register - Register a new user
///
/// Always creates; names are not required to be unique.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<types::RegisterRequest>,
) -> Result<Json<types::RegisterResponse>, ApiError> {
    let user = UserRepository::create(
        state.db(),
        CreateUser {
            name: req.name,
            age: req.age,
            gender: req.gender,
        },
    )
    .await?;

    Ok(Json(types::RegisterResponse {
        message: "User Registered Successfully".to_string(),
        user: to_wire(user),
    }))
}

/// GET /profile/:userId - Fetch a user profile
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<types::ProfileResponse>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)?;

    let user = UserRepository::find_by_id(state.db(), user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User Not Found".to_string()))?;

    Ok(Json(types::ProfileResponse {
        user: to_wire(user),
    }))
}
