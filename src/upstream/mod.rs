//! Meal-Plan Service
//!
//! The remote service that owns the food database, the tips and plan
//! generation. Handlers reach it through the [`MealService`] trait so the
//! router can run against any implementation.

mod client;
pub mod types;

pub use client::MealApiClient;
pub use types::{FoodDatabase, Meal, MealPlan, MealPlanResponse, ProteinFood, TipsResponse};

use async_trait::async_trait;
use thiserror::Error;

/// Operations the frontend API needs from the meal-plan service
#[async_trait]
pub trait MealService: Send + Sync {
    /// Up to `count` nutrition tips
    async fn tips(&self, count: u32) -> Result<Vec<String>, UpstreamError>;

    /// A plan for the given goal; application failures are `Ok` with `success == false`
    async fn generate_meal_plan(&self, protein_goal: u32) -> Result<MealPlanResponse, UpstreamError>;

    async fn foods(&self) -> Result<FoodDatabase, UpstreamError>;

    /// Check the service is reachable
    async fn health_check(&self) -> Result<(), UpstreamError>;
}

/// Errors talking to the meal-plan service
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Meal-plan service unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream error {status}: {message}")]
    Status { status: u16, message: String },
}
