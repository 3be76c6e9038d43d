//! Food Database Modal
//!
//! Lists proteins with their details, and veggies and carbs by name.

use leptos::*;

use crate::api::ProteinFood;
use crate::controller::{self, FOOD_MODAL_ID};
use crate::state::use_global_state;

/// Label/value pairs shown under a protein's name
pub fn protein_details(food: &ProteinFood) -> [(&'static str, String); 3] {
    [
        ("Protein", format!("{}g", food.protein)),
        ("Cost", food.cost.clone()),
        ("Type", food.kind.clone()),
    ]
}

/// Modal dialog with the food database
#[component]
pub fn FoodModal() -> impl IntoView {
    let state = use_global_state();

    let display = move || {
        if state.modal_open.get() {
            "display: block"
        } else {
            "display: none"
        }
    };

    // Clicking the backdrop itself counts as a close
    window_event_listener(ev::click, move |ev| {
        controller::close_modal_on_backdrop(state, &ev);
    });

    let proteins = move || state.foods.get().map(|db| db.proteins).unwrap_or_default();
    let veggies = move || state.foods.get().map(|db| db.veggies).unwrap_or_default();
    let carbs = move || state.foods.get().map(|db| db.carbs).unwrap_or_default();

    view! {
        <div id=FOOD_MODAL_ID class="modal" style=display>
            <div class="modal-content">
                <span class="close" on:click=move |_| controller::close_modal(state)>
                    "×"
                </span>
                <h2>"Food Database"</h2>

                <div class="food-section">
                    <h3>"Proteins"</h3>
                    <div id="proteinsList" class="food-list">
                        {move || proteins().into_iter().map(|food| view! { <ProteinItem food=food /> }).collect_view()}
                    </div>
                </div>

                <div class="food-section">
                    <h3>"Vegetables"</h3>
                    <div id="veggiesList" class="food-list">
                        {move || veggies().into_iter().map(|name| view! { <SimpleFoodItem name=name /> }).collect_view()}
                    </div>
                </div>

                <div class="food-section">
                    <h3>"Carbs"</h3>
                    <div id="carbsList" class="food-list">
                        {move || carbs().into_iter().map(|name| view! { <SimpleFoodItem name=name /> }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProteinItem(food: ProteinFood) -> impl IntoView {
    let details = protein_details(&food);

    view! {
        <div class="food-item">
            <h4>{food.name}</h4>
            {details.into_iter().map(|(label, value)| view! {
                <div class="food-detail">
                    <strong>{label}":"</strong>" "{value}
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn SimpleFoodItem(#[prop(into)] name: String) -> impl IntoView {
    view! {
        <div class="food-item">
            <h4>{name}</h4>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_details() {
        let food = ProteinFood {
            name: "Chicken".to_string(),
            protein: 31,
            cost: "$".to_string(),
            kind: "lean".to_string(),
        };

        let details = protein_details(&food);
        assert_eq!(details[0], ("Protein", "31g".to_string()));
        assert_eq!(details[1], ("Cost", "$".to_string()));
        assert_eq!(details[2], ("Type", "lean".to_string()));
    }
}
