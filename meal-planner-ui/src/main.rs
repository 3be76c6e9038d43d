//! Meal Planner Frontend
//!
//! Browser-side view for the meal planner, built with Leptos (WASM).
//!
//! # Features
//!
//! - Nutrition tips
//! - Daily meal plan generation for a protein goal
//! - Protein goal tracking with a progress bar
//! - Food database browser in a modal dialog
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the meal planner JSON API over HTTP, keeps the
//! session state in signals and projects it into the DOM.

use leptos::*;

mod api;
mod app;
mod components;
mod controller;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
