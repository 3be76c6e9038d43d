//! UI Components
//!
//! Leptos components projecting the global state into the page.

pub mod food_modal;
pub mod loading;
pub mod meal_card;
pub mod protein_tracker;
pub mod tabs;
pub mod tips;

pub use food_modal::FoodModal;
pub use loading::LoadingOverlay;
pub use meal_card::MealList;
pub use protein_tracker::ProteinTracker;
pub use tabs::{TabButton, TabPanel};
pub use tips::TipList;
