//! # Meal Planner
//!
//! Web server for the meal planner. It serves the compiled Leptos frontend
//! and the JSON API the frontend calls, forwarding each API call to the
//! remote meal-plan service that owns the food database and plan generation.
//!
//! ## Modules
//!
//! - [`api`]: REST API server with Axum
//! - [`upstream`]: Client for the remote meal-plan service
//! - [`config`]: TOML + environment configuration
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meal_planner::api::{serve, AppState};
//! use meal_planner::config::Config;
//! use meal_planner::upstream::MealApiClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = MealApiClient::new(config.upstream.clone())?;
//!
//!     let state = AppState::new(Arc::new(client), config.server.clone());
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod upstream;

pub use config::Config;
pub use upstream::{MealApiClient, MealService, UpstreamError};
