//! Loading Component
//!
//! Spinner shown over content while a request is in flight.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <span class="loading-spinner" />
    }
}

/// Dims its children and shows a spinner while `loading` is set
#[component]
pub fn LoadingOverlay(
    #[prop(into)]
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="overlay-host">
            {children()}

            {move || {
                if loading.get() {
                    view! {
                        <div class="loading-overlay">
                            <Spinner />
                        </div>
                    }.into_view()
                } else {
                    ().into_view()
                }
            }}
        </div>
    }
}
