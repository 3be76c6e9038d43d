//! Meal Card Components
//!
//! Renders a generated plan as one card per meal slot.

use leptos::*;

use crate::api::{Meal, MealPlan, MealSlot};
use crate::state::use_global_state;

/// Cards for breakfast, lunch and dinner, in that order
#[component]
pub fn MealList() -> impl IntoView {
    let state = use_global_state();

    view! {
        {move || state.meal_plan.get().map(|plan| view! { <PlanSummary plan=plan /> })}

        <div id="mealsContainer" class="meals-grid">
            {move || {
                match state.meal_plan.get() {
                    Some(plan) => plan
                        .meals()
                        .into_iter()
                        .map(|(slot, meal)| view! { <MealCard kind=slot meal=meal.clone() /> })
                        .collect_view(),
                    None => view! {
                        <p class="placeholder">"Click \"Generate Meal Plan\" to get started."</p>
                    }
                    .into_view(),
                }
            }}
        </div>
    }
}

/// Generation date and goal, when the server sends them
#[component]
fn PlanSummary(plan: MealPlan) -> impl IntoView {
    let generated = plan.date.map(|date| format!("Generated {}", date));
    let goal = plan.protein_goal.map(|goal| format!("Goal: {}g", goal));

    view! {
        <div class="plan-summary">
            {generated.map(|text| view! { <span class="plan-date">{text}</span> })}
            {goal.map(|text| view! { <span class="plan-goal">{text}</span> })}
            <span class="plan-total">{format!("Total protein: {}g", plan.total_protein)}</span>
        </div>
    }
}

/// Card for a single meal
#[component]
pub fn MealCard(kind: MealSlot, meal: Meal) -> impl IntoView {
    let protein = meal.protein;

    view! {
        <div class="meal-card" data-slot=kind.key()>
            <h3>{meal.label}</h3>
            <div class="meal-item">
                <strong>"Protein:"</strong>
                {format!(" {} ({}g)", protein.name, protein.protein)}
                <br />
                <small>{format!("Cost: {} • Type: {}", protein.cost, protein.kind)}</small>
            </div>
            <div class="meal-item">
                <strong>"Vegetable:"</strong>" "{meal.veggie}
            </div>
            <div class="meal-item">
                <strong>"Carb:"</strong>" "{meal.carb}
            </div>
        </div>
    }
}
