//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use super::session::SessionState;
use super::tabs::TabSelection;
use crate::api::{FoodDatabase, MealPlan};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Protein goal and last plan total
    pub session: RwSignal<SessionState>,
    /// Tips currently on display
    pub tips: RwSignal<Vec<String>>,
    /// Last successfully generated plan
    pub meal_plan: RwSignal<Option<MealPlan>>,
    /// Food database, loaded when the modal is first opened
    pub foods: RwSignal<Option<FoodDatabase>>,
    /// Food database modal visibility
    pub modal_open: RwSignal<bool>,
    pub tabs: RwSignal<TabSelection>,
    /// Meal plan request in flight
    pub loading: RwSignal<bool>,
}

impl GlobalState {
    /// Fresh page state: default goal, nothing loaded, meal plan tab open
    pub fn new() -> Self {
        Self {
            session: create_rw_signal(SessionState::default()),
            tips: create_rw_signal(Vec::new()),
            meal_plan: create_rw_signal(None),
            foods: create_rw_signal(None),
            modal_open: create_rw_signal(false),
            tabs: create_rw_signal(TabSelection::default()),
            loading: create_rw_signal(false),
        }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState::new();
    provide_context(state);
    state
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

/// Holds a loading flag raised until dropped
///
/// The flag is lowered on every exit path of the owning scope.
pub struct LoadingGuard<F: FnMut(bool)> {
    set_loading: F,
}

impl<F: FnMut(bool)> LoadingGuard<F> {
    pub fn new(mut set_loading: F) -> Self {
        set_loading(true);
        Self { set_loading }
    }
}

impl<F: FnMut(bool)> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        (self.set_loading)(false);
    }
}

impl GlobalState {
    /// Raise the loading flag for the lifetime of the returned guard
    pub fn begin_loading(&self) -> LoadingGuard<impl FnMut(bool)> {
        let loading = self.loading;
        LoadingGuard::new(move |value| loading.set(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_loading_guard_clears_on_drop() {
        let flag = Rc::new(Cell::new(false));
        let setter = {
            let flag = Rc::clone(&flag);
            move |value| flag.set(value)
        };

        {
            let _guard = LoadingGuard::new(setter);
            assert!(flag.get());
        }
        assert!(!flag.get());
    }

    #[test]
    fn test_loading_guard_clears_on_early_return() {
        fn fails(flag: Rc<Cell<bool>>) -> Result<(), String> {
            let _guard = LoadingGuard::new(move |value| flag.set(value));
            let response: Result<u32, String> = Err("network down".to_string());
            response?;
            Ok(())
        }

        let flag = Rc::new(Cell::new(false));
        assert!(fails(Rc::clone(&flag)).is_err());
        assert!(!flag.get());
    }
    #[test]
    fn test_begin_loading_drives_signal() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        {
            let _loading = state.begin_loading();
            assert!(state.loading.get_untracked());
        }
        assert!(!state.loading.get_untracked());

        runtime.dispose();
    }
}
