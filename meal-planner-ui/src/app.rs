//! App Root Component
//!
//! Page layout, global state provider and startup requests.

use leptos::*;

use crate::components::{FoodModal, LoadingOverlay, MealList, ProteinTracker, TabButton, TabPanel, TipList};
use crate::controller;
use crate::state::provide_global_state;
use crate::state::tabs::{MEAL_PLAN_TAB, TIPS_TAB};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();

    // Keep the body's loading class in step with the request flag
    create_effect(move |_| controller::sync_body_loading_class(state.loading.get()));

    controller::load_tips(state);
    controller::update_protein_display(state, 0);

    view! {
        <div class="container">
            <header>
                <h1>"Meal Planner"</h1>
                <p class="subtitle">"Budget-friendly meals that hit your protein goal"</p>
                <button class="btn" on:click=move |_| controller::show_food_database(state)>
                    "View Food Database"
                </button>
            </header>

            <nav class="tabs">
                <TabButton panel=MEAL_PLAN_TAB label="Meal Plan" />
                <TabButton panel=TIPS_TAB label="Nutrition Tips" />
            </nav>

            <TabPanel panel=MEAL_PLAN_TAB>
                <ProteinTracker />
                <LoadingOverlay loading=state.loading>
                    <MealList />
                </LoadingOverlay>
            </TabPanel>

            <TabPanel panel=TIPS_TAB>
                <h2>"Nutrition Tips"</h2>
                <TipList />
            </TabPanel>

            <FoodModal />
        </div>
    }
}
