//! Data Transfer Objects
//!
//! Query parameters and server-owned response bodies. Meal data itself uses
//! the service types in [`crate::upstream::types`].

use serde::{Deserialize, Serialize};

pub const DEFAULT_TIP_COUNT: u32 = 3;
pub const MAX_TIP_COUNT: u32 = 50;

pub const DEFAULT_PROTEIN_GOAL: u32 = 50;
pub const MIN_PROTEIN_GOAL: u32 = 20;
pub const MAX_PROTEIN_GOAL: u32 = 150;

/// `GET /api/tips` query
#[derive(Debug, Deserialize)]
pub struct TipsQuery {
    #[serde(default = "default_tip_count")]
    pub count: u32,
}

fn default_tip_count() -> u32 {
    DEFAULT_TIP_COUNT
}

/// `GET /api/generate-meal-plan` query
///
/// Signed and wide so that every integer reaches the range check.
#[derive(Debug, Deserialize)]
pub struct MealPlanQuery {
    #[serde(default = "default_protein_goal")]
    pub protein_goal: i64,
}

fn default_protein_goal() -> i64 {
    DEFAULT_PROTEIN_GOAL.into()
}

impl MealPlanQuery {
    /// The goal, if it lies in the accepted range
    pub fn goal_in_range(&self) -> Option<u32> {
        u32::try_from(self.protein_goal)
            .ok()
            .filter(|goal| (MIN_PROTEIN_GOAL..=MAX_PROTEIN_GOAL).contains(goal))
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" or "unreachable"
    pub upstream: String,
    pub uptime_seconds: u64,
    pub version: String,
    /// RFC 3339 time of the check
    pub checked_at: String,
}
