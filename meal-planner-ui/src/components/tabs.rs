//! Tab Components

use leptos::*;

use crate::controller;
use crate::state::tabs::button_id;
use crate::state::use_global_state;

/// Button that opens `panel` and reports itself as the trigger
#[component]
pub fn TabButton(panel: &'static str, label: &'static str) -> impl IntoView {
    let state = use_global_state();
    let id = button_id(panel);
    let trigger = id.clone();

    let class = {
        let id = id.clone();
        move || {
            if state.tabs.get().is_button_active(&id) {
                "tab-btn active"
            } else {
                "tab-btn"
            }
        }
    };

    view! {
        <button id=id class=class on:click=move |_| controller::open_tab(state, panel, &trigger)>
            {label}
        </button>
    }
}

/// Panel shown while its tab is active
#[component]
pub fn TabPanel(panel: &'static str, children: Children) -> impl IntoView {
    let state = use_global_state();

    let class = move || {
        if state.tabs.get().is_panel_active(panel) {
            "tab-content active"
        } else {
            "tab-content"
        }
    };

    view! {
        <div id=panel class=class>
            {children()}
        </div>
    }
}
