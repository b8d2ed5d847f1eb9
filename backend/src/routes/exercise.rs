//! Exercise log API routes

use crate::error::ApiError;
use crate::repositories::{CreateExerciseLog, ExerciseLogRecord, ExerciseRepository, UserRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use fittrack_shared::types;
use uuid::Uuid;

fn to_wire(log: ExerciseLogRecord) -> types::ExerciseLog {
    types::ExerciseLog {
        id: log.id.to_string(),
        user_id: log.user_id.to_string(),
        exercise_type: log.exercise_type,
        duration: log.duration,
        date: log.date,
    }
}

/// POST /addExerciseLog - Append an exercise log for a user
///
/// Owner existence gates the write, same policy as /addWeightRecord.
pub async fn add_exercise_log(
    State(state): State<AppState>,
    Json(req): Json<types::AddExerciseLogRequest>,
) -> Result<Json<types::ExerciseLogResponse>, ApiError> {
    let user_id = Uuid::parse_str(&req.user_id)?;

    UserRepository::find_by_id(state.db(), user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User Not Found".to_string()))?;

    let log = ExerciseRepository::create(
        state.db(),
        CreateExerciseLog {
            user_id,
            exercise_type: req.exercise_type,
            duration: req.duration,
            date: req.date,
        },
    )
    .await?;

    Ok(Json(types::ExerciseLogResponse {
        message: "Exercise Log Saved Successfully".to_string(),
        log: to_wire(log),
    }))
}

/// GET /exerciseHistory/:userId - List a user's exercise logs
///
/// An unknown owner yields an empty list, not a 404.
pub async fn exercise_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<types::ExerciseHistoryResponse>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)?;

    let logs = ExerciseRepository::find_by_owner(state.db(), user_id).await?;

    Ok(Json(types::ExerciseHistoryResponse {
        exercise_logs: logs.into_iter().map(to_wire).collect(),
    }))
}

/// PUT /updateExerciseLog/:logId - Amend the duration of a log
pub async fn update_exercise_log(
    State(state): State<AppState>,
    Path(log_id): Path<String>,
    Json(req): Json<types::UpdateExerciseLogRequest>,
) -> Result<Json<types::ExerciseLogResponse>, ApiError> {
    let log_id = Uuid::parse_str(&log_id)?;

    let log = ExerciseRepository::update_duration(state.db(), log_id, req.duration)
        .await?
        .ok_or_else(|| ApiError::NotFound("Exercise Log Not Found".to_string()))?;

    Ok(Json(types::ExerciseLogResponse {
        message: "Exercise Log Updated Successfully".to_string(),
        log: to_wire(log),
    }))
}

/// DELETE /deleteExerciseLog/:logId - Remove an exercise log
pub async fn delete_exercise_log(
    State(state): State<AppState>,
    Path(log_id): Path<String>,
) -> Result<Json<types::ExerciseLogResponse>, ApiError> {
    let log_id = Uuid::parse_str(&log_id)?;

    let log = ExerciseRepository::delete_by_id(state.db(), log_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Exercise Log Not Found".to_string()))?;

    Ok(Json(types::ExerciseLogResponse {
        message: "Exercise Log Deleted Successfully".to_string(),
        log: to_wire(log),
    }))
}
