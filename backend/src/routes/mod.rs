//! Route definitions for the FitTrack API
//!
//! This module organizes all API routes and applies middleware. The
//! resource routes live at the root of the path space; each handler
//! maps one-to-one onto a single repository operation.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod diet;
mod exercise;
mod health;
mod users;
mod weight;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .merge(resource_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resource routes, one per store operation
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/profile/:user_id", get(users::get_profile))
        .route("/addWeightRecord", post(weight::add_weight_record))
        .route("/weightHistory/:user_id", get(weight::weight_history))
        .route("/updateWeightRecord/:record_id", put(weight::update_weight_record))
        .route("/deleteWeightRecord/:record_id", delete(weight::delete_weight_record))
        .route("/addExerciseLog", post(exercise::add_exercise_log))
        .route("/exerciseHistory/:user_id", get(exercise::exercise_history))
        .route("/updateExerciseLog/:log_id", put(exercise::update_exercise_log))
        .route("/deleteExerciseLog/:log_id", delete(exercise::delete_exercise_log))
        .route("/createDietAndMeals/:user_id", post(diet::create_diet_and_meals))
        .route("/getMealsForDiet/:diet_id", get(diet::get_meals_for_diet))
}
