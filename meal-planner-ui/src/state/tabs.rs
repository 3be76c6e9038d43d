//! Tab Selection
//!
//! Exactly one panel and one button are active at a time.

pub const MEAL_PLAN_TAB: &str = "meal-plan";
pub const TIPS_TAB: &str = "nutrition-tips";

/// Button id for a panel's own tab button
pub fn button_id(panel: &str) -> String {
    format!("{}-btn", panel)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSelection {
    pub panel: String,
    /// The button that triggered the switch
    pub button: String,
}

impl Default for TabSelection {
    fn default() -> Self {
        Self {
            panel: MEAL_PLAN_TAB.to_string(),
            button: button_id(MEAL_PLAN_TAB),
        }
    }
}

impl TabSelection {
    /// Activate `panel` and the button that asked for it
    pub fn open(&mut self, panel: &str, trigger: &str) {
        self.panel = panel.to_string();
        self.button = trigger.to_string();
    }

    pub fn is_panel_active(&self, panel: &str) -> bool {
        self.panel == panel
    }

    pub fn is_button_active(&self, button: &str) -> bool {
        self.button == button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_meal_plan() {
        let tabs = TabSelection::default();
        assert!(tabs.is_panel_active(MEAL_PLAN_TAB));
        assert!(tabs.is_button_active("meal-plan-btn"));
        assert!(!tabs.is_panel_active(TIPS_TAB));
    }

    #[test]
    fn test_open_switches_panel_and_button() {
        let mut tabs = TabSelection::default();
        tabs.open(TIPS_TAB, &button_id(TIPS_TAB));

        let panels = [MEAL_PLAN_TAB, TIPS_TAB];
        let active: Vec<_> = panels.iter().filter(|p| tabs.is_panel_active(p)).collect();
        assert_eq!(active, vec![&TIPS_TAB]);
        assert!(tabs.is_button_active("nutrition-tips-btn"));
        assert!(!tabs.is_button_active("meal-plan-btn"));
    }

    #[test]
    fn test_trigger_need_not_match_panel() {
        let mut tabs = TabSelection::default();
        tabs.open(TIPS_TAB, "header-tips-link");
        assert!(tabs.is_panel_active(TIPS_TAB));
        assert!(tabs.is_button_active("header-tips-link"));
        assert!(!tabs.is_button_active("nutrition-tips-btn"));
    }
}
