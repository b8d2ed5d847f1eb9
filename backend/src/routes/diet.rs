//! Diet and meal API routes

use crate::error::ApiError;
use crate::repositories::{diet::Meal, CreateDiet, DietRecord, DietRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use fittrack_shared::types;
use uuid::Uuid;

fn meals_to_wire(meals: Vec<Meal>) -> Vec<types::Meal> {
    meals
        .into_iter()
        .map(|m| types::Meal {
            name: m.name,
            calories: m.calories,
        })
        .collect()
}

fn to_wire(diet: DietRecord) -> types::Diet {
    types::Diet {
        id: diet.id.to_string(),
        user_id: diet.user_id.to_string(),
        meals: meals_to_wire(diet.meals.0),
    }
}

/// POST /createDietAndMeals/:userId - Create a diet with embedded meals
///
/// The meal sequence is persisted verbatim, order preserved, with no
/// per-meal validation. The owner id is recorded as given; no
/// existence check runs on this path.
pub async fn create_diet_and_meals(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<types::CreateDietRequest>,
) -> Result<Json<types::CreateDietResponse>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)?;

    let meals = req
        .meals
        .into_iter()
        .map(|m| Meal {
            name: m.name,
            calories: m.calories,
        })
        .collect();

    let diet = DietRepository::create(state.db(), CreateDiet { user_id, meals }).await?;

    Ok(Json(types::CreateDietResponse {
        message: "Diet Created And Meals Added Successfully".to_string(),
        diet: to_wire(diet),
    }))
}

/// GET /getMealsForDiet/:dietId - Fetch the embedded meal sequence
pub async fn get_meals_for_diet(
    State(state): State<AppState>,
    Path(diet_id): Path<String>,
) -> Result<Json<types::MealsResponse>, ApiError> {
    let diet_id = Uuid::parse_str(&diet_id)?;

    let diet = DietRepository::find_by_id(state.db(), diet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Diet Not Found".to_string()))?;

    Ok(Json(types::MealsResponse {
        meals: meals_to_wire(diet.meals.0),
    }))
}
