//! View Controller
//!
//! Operations triggered by user events. Each one calls the API at most once,
//! then projects the result into the global state; the components render
//! whatever the state holds.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, MouseEvent};

use crate::api::{self, FoodDatabase, MealPlan, MealPlanResponse};
use crate::state::session::goal_updated_message;
use crate::state::GlobalState;

/// Number of tips requested on page load
pub const TIP_COUNT: u32 = 3;

/// Element id of the food database modal backdrop
pub const FOOD_MODAL_ID: &str = "foodModal";

/// Class set on `<body>` while a meal plan request is in flight
pub const LOADING_CLASS: &str = "loading";

pub const PLAN_FAILED_MESSAGE: &str = "Failed to generate meal plan. Please try again.";
pub const FOODS_FAILED_MESSAGE: &str = "Failed to load food database";

/// What a meal plan request ended in
#[derive(Clone, Debug, PartialEq)]
pub enum PlanOutcome {
    Rendered(MealPlan),
    /// The API answered with `success: false`
    Rejected { error: String },
    /// Network or decoding failure
    Failed { reason: String },
}

impl PlanOutcome {
    /// Text for the blocking alert, if the outcome needs one
    pub fn alert(&self) -> Option<String> {
        match self {
            PlanOutcome::Rendered(_) => None,
            PlanOutcome::Rejected { error } => {
                Some(format!("Error generating meal plan: {}", error))
            }
            PlanOutcome::Failed { .. } => Some(PLAN_FAILED_MESSAGE.to_string()),
        }
    }
}

/// Classify the result of a meal plan request
pub fn resolve_plan(result: Result<MealPlanResponse, String>) -> PlanOutcome {
    match result {
        Ok(response) if response.success => match response.data {
            Some(plan) => PlanOutcome::Rendered(plan),
            None => PlanOutcome::Failed {
                reason: "Parse error: successful response without data".to_string(),
            },
        },
        Ok(response) => PlanOutcome::Rejected {
            error: response.error.unwrap_or_else(|| "Unknown error".to_string()),
        },
        Err(reason) => PlanOutcome::Failed { reason },
    }
}

/// Fetch tips and replace the tip list
///
/// Failures are logged and the current tips stay on screen.
pub fn load_tips(state: GlobalState) {
    spawn_local(async move {
        match api::fetch_tips(TIP_COUNT).await {
            Ok(tips) => state.tips.set(tips),
            Err(e) => log_error(&format!("Error loading tips: {}", e)),
        }
    });
}

/// Request a plan for the current goal and render it
pub fn generate_meal_plan(state: GlobalState) {
    spawn_local(async move {
        let _loading = state.begin_loading();

        let goal = state.session.get_untracked().protein_goal;
        let outcome = resolve_plan(api::generate_meal_plan(goal).await);

        if let PlanOutcome::Failed { reason } = &outcome {
            log_error(&format!("Error: {}", reason));
        }
        if let Some(message) = apply_plan_outcome(state, outcome) {
            blocking_alert(&message);
        }
    });
}

/// Project a finished plan request into the state
///
/// Only a rendered plan touches the state. Returns the alert to show.
pub fn apply_plan_outcome(state: GlobalState, outcome: PlanOutcome) -> Option<String> {
    let alert = outcome.alert();

    if let PlanOutcome::Rendered(plan) = outcome {
        update_protein_display(state, plan.total_protein);
        state.tips.set(plan.tips.clone());
        state.meal_plan.set(Some(plan));
    }

    alert
}

/// What the user sees after submitting a goal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalFeedback {
    pub alert: String,
    /// Value to put back in the input when the goal was rejected
    pub restore: Option<String>,
}

/// Validate the goal input and apply it
///
/// A rejected value is reverted in the input field.
pub fn update_protein_goal(state: GlobalState, input: &HtmlInputElement) {
    let feedback = apply_goal_input(state, &input.value());

    blocking_alert(&feedback.alert);
    if let Some(value) = feedback.restore {
        input.set_value(&value);
    }
}

/// Apply raw goal input to the session
pub fn apply_goal_input(state: GlobalState, raw: &str) -> GoalFeedback {
    let mut session = state.session.get_untracked();

    match session.update_goal(raw) {
        Ok(goal) => {
            state.session.set(session);
            GoalFeedback {
                alert: goal_updated_message(goal),
                restore: None,
            }
        }
        Err(e) => GoalFeedback {
            alert: e.to_string(),
            restore: Some(session.protein_goal.to_string()),
        },
    }
}

/// Record the protein total on display; the tracker derives text and width
pub fn update_protein_display(state: GlobalState, current: u32) {
    state.session.update(|session| session.current_protein = current);
}

/// Load the food database and open the modal
pub fn show_food_database(state: GlobalState) {
    spawn_local(async move {
        let result = api::fetch_foods().await;

        if let Err(e) = &result {
            log_error(&format!("Error loading food database: {}", e));
        }
        if let Some(message) = apply_foods(state, result) {
            blocking_alert(message);
        }
    });
}

/// Store a loaded food database and open the modal
///
/// On failure nothing changes and the alert to show is returned.
pub fn apply_foods(
    state: GlobalState,
    result: Result<FoodDatabase, String>,
) -> Option<&'static str> {
    match result {
        Ok(foods) => {
            state.foods.set(Some(foods));
            state.modal_open.set(true);
            None
        }
        Err(_) => Some(FOODS_FAILED_MESSAGE),
    }
}

pub fn close_modal(state: GlobalState) {
    state.modal_open.set(false);
}

/// Close the modal when a click lands on its backdrop, outside the content
pub fn close_modal_on_backdrop(state: GlobalState, ev: &MouseEvent) {
    let target_id = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| element.id());

    close_modal_for_click(state, target_id.as_deref());
}

/// Close the modal if the clicked element is the backdrop itself
pub fn close_modal_for_click(state: GlobalState, target_id: Option<&str>) {
    if target_id == Some(FOOD_MODAL_ID) {
        close_modal(state);
    }
}

/// Show `panel` and mark `trigger` as the active tab button
pub fn open_tab(state: GlobalState, panel: &str, trigger: &str) {
    state.tabs.update(|tabs| tabs.open(panel, trigger));
}

/// Mirror the loading flag onto the `<body>` class list
pub fn sync_body_loading_class(loading: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());

    if let Some(body) = body {
        let _ = body.class_list().toggle_with_force(LOADING_CLASS, loading);
    }
}

/// Synchronous alert dialog
fn blocking_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
