//! Weight record API routes

use crate::error::ApiError;
use crate::repositories::{CreateWeightRecord, UserRepository, WeightRecord, WeightRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use fittrack_shared::types;
use uuid::Uuid;

fn to_wire(record: WeightRecord) -> types::WeightRecord {
    types::WeightRecord {
        id: record.id.to_string(),
        user_id: record.user_id.to_string(),
        date: record.date,
        weight: record.weight,
    }
}

/// POST /addWeightRecord - Append a weight record for a user
///
/// The owning user must exist; an absent owner is a 404 and nothing is
/// written. This is the only route that checks ownership.
pub async fn add_weight_record(
    State(state): State<AppState>,
    Json(req): Json<types::AddWeightRecordRequest>,
) -> Result<Json<types::WeightRecordResponse>, ApiError> {
    let user_id = Uuid::parse_str(&req.user_id)?;

    UserRepository::find_by_id(state.db(), user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User Not Found".to_string()))?;

    let record = WeightRepository::create(
        state.db(),
        CreateWeightRecord {
            user_id,
            date: req.date,
            weight: req.weight,
        },
    )
    .await?;

    Ok(Json(types::WeightRecordResponse {
        message: "Weight Record Saved Successfully".to_string(),
        record: to_wire(record),
    }))
}

/// GET /weightHistory/:userId - List a user's weight records
///
/// An unknown owner yields an empty list, not a 404.
pub async fn weight_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<types::WeightHistoryResponse>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)?;

    let records = WeightRepository::find_by_owner(state.db(), user_id).await?;

    Ok(Json(types::WeightHistoryResponse {
        weight_records: records.into_iter().map(to_wire).collect(),
    }))
}

/// PUT /updateWeightRecord/:recordId - Amend the weight of a record
pub async fn update_weight_record(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    Json(req): Json<types::UpdateWeightRecordRequest>,
) -> Result<Json<types::WeightRecordResponse>, ApiError> {
    let record_id = Uuid::parse_str(&record_id)?;

    let record = WeightRepository::update_weight(state.db(), record_id, req.weight)
        .await?
        .ok_or_else(|| ApiError::NotFound("Weight Record Not Found".to_string()))?;

    Ok(Json(types::WeightRecordResponse {
        message: "Weight Record Updated Successfully".to_string(),
        record: to_wire(record),
    }))
}

/// DELETE /deleteWeightRecord/:recordId - Remove a weight record
pub async fn delete_weight_record(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> Result<Json<types::WeightRecordResponse>, ApiError> {
    let record_id = Uuid::parse_str(&record_id)?;

    let record = WeightRepository::delete_by_id(state.db(), record_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Weight Record Not Found".to_string()))?;

    Ok(Json(types::WeightRecordResponse {
        message: "Weight Record Deleted Successfully".to_string(),
        record: to_wire(record),
    }))
}
