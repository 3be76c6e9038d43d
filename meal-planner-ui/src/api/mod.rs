//! Meal Planner API
//!
//! HTTP client and response types.

pub mod client;
pub mod types;

pub use client::{fetch_foods, fetch_tips, generate_meal_plan};
pub use types::{FoodDatabase, Meal, MealPlan, MealPlanResponse, MealSlot, ProteinFood};
