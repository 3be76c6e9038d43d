//! Food Database Routes
//!
//! - GET /api/foods - Proteins, veggies and carbs

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::upstream::FoodDatabase;

/// GET /api/foods
pub async fn get_foods(State(state): State<Arc<AppState>>) -> ApiResult<Json<FoodDatabase>> {
    let foods = state.meals.foods().await?;
    Ok(Json(foods))
}
