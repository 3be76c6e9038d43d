//! API Routes
//!
//! Route handlers organized by functionality.

pub mod foods;
pub mod health;
pub mod meal_plan;
pub mod tips;

use axum::extract::OriginalUri;

use crate::api::error::ApiError;

/// Fallback for `/api/*` paths no route matches
pub async fn unknown_api_route(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("no API route for {}", uri.path()))
}
