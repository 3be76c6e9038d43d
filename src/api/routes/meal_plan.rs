//! Meal Plan Routes
//!
//! - GET /api/generate-meal-plan?protein_goal=N - Generate a daily plan

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{MealPlanQuery, MAX_PROTEIN_GOAL, MIN_PROTEIN_GOAL};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::upstream::{MealPlan, MealPlanResponse};

/// GET /api/generate-meal-plan
///
/// Goals outside the accepted range are refused in the response envelope,
/// the same way the service reports its own failures.
pub async fn generate_meal_plan(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MealPlanQuery>,
) -> ApiResult<Json<MealPlanResponse>> {
    let Some(goal) = query.goal_in_range() else {
        tracing::debug!(protein_goal = query.protein_goal, "Rejecting out-of-range protein goal");
        return Ok(Json(MealPlanResponse::failure(format!(
            "protein_goal must be between {} and {}",
            MIN_PROTEIN_GOAL, MAX_PROTEIN_GOAL
        ))));
    };

    let response = state.meals.generate_meal_plan(goal).await?;
    match ServiceAnswer::of(&response) {
        ServiceAnswer::Plan(plan) => {
            tracing::info!(
                protein_goal = goal,
                total_protein = plan.total_protein,
                "Meal plan generated"
            );
        }
        ServiceAnswer::Refused(error) => {
            tracing::warn!(protein_goal = goal, error = ?error, "Meal plan service refused request");
        }
        ServiceAnswer::Malformed => {
            tracing::warn!(protein_goal = goal, "Meal plan service reported success without a plan");
        }
    }

    Ok(Json(response))
}

/// How the service answered a plan request
#[derive(Debug, PartialEq)]
enum ServiceAnswer<'a> {
    Plan(&'a MealPlan),
    Refused(Option<&'a str>),
    /// `success: true` with no `data`
    Malformed,
}

impl<'a> ServiceAnswer<'a> {
    fn of(response: &'a MealPlanResponse) -> Self {
        match (response.success, &response.data) {
            (true, Some(plan)) => ServiceAnswer::Plan(plan),
            (true, None) => ServiceAnswer::Malformed,
            (false, _) => ServiceAnswer::Refused(response.error.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_answer_refused() {
        let response = MealPlanResponse::failure("no foods available");
        assert_eq!(
            ServiceAnswer::of(&response),
            ServiceAnswer::Refused(Some("no foods available"))
        );
    }

    #[test]
    fn test_service_answer_success_without_plan_is_malformed() {
        let response: MealPlanResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ServiceAnswer::of(&response), ServiceAnswer::Malformed);
    }
}
