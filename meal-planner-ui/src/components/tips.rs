//! Nutrition Tips Component

use leptos::*;

use crate::state::use_global_state;

/// Text of a single tip line
pub fn tip_line(tip: &str) -> String {
    format!("• {}", tip)
}

/// Bullet list of the tips on display
#[component]
pub fn TipList() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div id="tipsContainer">
            {move || {
                state.tips.get().iter().map(|tip| view! {
                    <div class="tip">{tip_line(tip)}</div>
                }).collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_line() {
        assert_eq!(
            tip_line("Walk for 30 minutes daily to boost metabolism"),
            "• Walk for 30 minutes daily to boost metabolism"
        );
    }
}
