//! Protein Tracker Component
//!
//! Goal input, progress bar and the generate button.

use leptos::html::Input;
use leptos::*;

use crate::controller;
use crate::state::use_global_state;

#[component]
pub fn ProteinTracker() -> impl IntoView {
    let state = use_global_state();
    let goal_input = create_node_ref::<Input>();

    let progress = create_memo(move |_| state.session.get().progress());

    let on_update = move |_| {
        if let Some(input) = goal_input.get() {
            controller::update_protein_goal(state, &input);
        }
    };

    view! {
        <section class="protein-tracker">
            <div class="goal-setter">
                <label for="proteinGoal">"Daily protein goal (g)"</label>
                <input
                    id="proteinGoal"
                    type="number"
                    min="20"
                    max="150"
                    value=state.session.get_untracked().protein_goal.to_string()
                    node_ref=goal_input
                />
                <button class="btn" on:click=on_update>"Update Goal"</button>
            </div>

            <div class="progress-container">
                <div
                    id="proteinProgress"
                    class="progress-bar"
                    style:width=move || progress.get().width()
                />
            </div>
            <p id="proteinText">{move || progress.get().text()}</p>

            <button
                class="btn btn-primary"
                disabled=move || state.loading.get()
                on:click=move |_| controller::generate_meal_plan(state)
            >
                {move || if state.loading.get() { "Generating..." } else { "Generate Meal Plan" }}
            </button>
        </section>
    }
}
