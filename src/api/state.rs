//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::upstream::MealService;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Meal-plan service the API forwards to
    pub meals: Arc<dyn MealService>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(meals: Arc<dyn MealService>, config: ServerConfig) -> Self {
        Self {
            meals,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
