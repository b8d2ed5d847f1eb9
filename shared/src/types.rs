//! API request and response types

use serde::{Deserialize, Serialize};

/// API error response
///
/// Every non-2xx response carries this body. Server errors use the
/// opaque reason "Internal Server Error"; not-found responses carry a
/// descriptive per-entity message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Users
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// User profile on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// POST /register response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

/// GET /profile/:userId response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

// ============================================================================
// Weight records
// ============================================================================

/// POST /addWeightRecord request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWeightRecordRequest {
    pub user_id: String,
    /// Caller-supplied date string, stored verbatim (format unvalidated)
    pub date: String,
    pub weight: f64,
}

/// Weight record on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightRecord {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub weight: f64,
}

/// Response for weight record create/update/delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRecordResponse {
    pub message: String,
    pub record: WeightRecord,
}

/// GET /weightHistory/:userId response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightHistoryResponse {
    pub weight_records: Vec<WeightRecord>,
}

/// PUT /updateWeightRecord/:recordId request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWeightRecordRequest {
    pub weight: f64,
}

// ============================================================================
// Exercise logs
// ============================================================================

/// POST /addExerciseLog request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExerciseLogRequest {
    pub user_id: String,
    pub exercise_type: String,
    pub duration: f64,
    pub date: String,
}

/// Exercise log on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    pub id: String,
    pub user_id: String,
    pub exercise_type: String,
    pub duration: f64,
    pub date: String,
}

/// Response for exercise log create/update/delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLogResponse {
    pub message: String,
    pub log: ExerciseLog,
}

/// GET /exerciseHistory/:userId response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseHistoryResponse {
    pub exercise_logs: Vec<ExerciseLog>,
}

/// PUT /updateExerciseLog/:logId request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateExerciseLogRequest {
    pub duration: f64,
}

// ============================================================================
// Diets and meals
// ============================================================================

/// A meal embedded in a diet. Meals have no identity of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub calories: f64,
}

/// POST /createDietAndMeals/:userId request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDietRequest {
    pub meals: Vec<Meal>,
}

/// Diet on the wire, with its embedded meal sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diet {
    pub id: String,
    pub user_id: String,
    pub meals: Vec<Meal>,
}

/// POST /createDietAndMeals/:userId response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDietResponse {
    pub message: String,
    pub diet: Diet,
}

/// GET /getMealsForDiet/:dietId response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealsResponse {
    pub meals: Vec<Meal>,
}
