//! Meal Planner REST API
//!
//! HTTP API layer, built with Axum. The frontend is served from the same
//! origin, so it can call the API with relative paths.
//!
//! # Endpoints
//!
//! ## Meals
//! - `GET /api/tips?count=N` - Nutrition tips
//! - `GET /api/generate-meal-plan?protein_goal=N` - Generate a daily plan
//! - `GET /api/foods` - Food database
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Unknown `/api/*` paths answer with a JSON 404.
//!
//! ## Frontend
//! - every other path is served from the static directory, with
//!   `index.html` as the fallback

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/tips", get(routes::tips::get_tips))
        .route("/generate-meal-plan", get(routes::meal_plan::generate_meal_plan))
        .route("/foods", get(routes::foods::get_foods))
        .fallback(routes::unknown_api_route);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let static_dir = &state.config.static_dir;
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let cors = cors_layer(&state.config.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured origins, or any origin when none are listed
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Meal planner listening on {}", addr);
    tracing::info!("Serving frontend from {:?}", config.static_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Meal planner shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{
        FoodDatabase, Meal, MealPlan, MealPlanResponse, MealService, ProteinFood, UpstreamError,
    };
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::util::ServiceExt;

    /// Canned meal-plan service
    #[derive(Default)]
    struct StubService {
        offline: bool,
        refuse_plans: bool,
        plan_requests: AtomicUsize,
    }

    fn protein(name: &str, grams: u32) -> ProteinFood {
        ProteinFood {
            name: name.to_string(),
            protein: grams,
            cost: "Low".to_string(),
            kind: "Animal".to_string(),
        }
    }

    fn meal(label: &str, grams: u32) -> Meal {
        Meal {
            label: label.to_string(),
            protein: protein("Eggs (2 large)", grams),
            veggie: "Cabbage Salad".to_string(),
            carb: "Roti (1 piece)".to_string(),
        }
    }

    #[async_trait]
    impl MealService for StubService {
        async fn tips(&self, count: u32) -> Result<Vec<String>, UpstreamError> {
            if self.offline {
                return Err(UpstreamError::Unavailable);
            }
            Ok((0..count).map(|i| format!("tip {}", i)).collect())
        }

        async fn generate_meal_plan(
            &self,
            protein_goal: u32,
        ) -> Result<MealPlanResponse, UpstreamError> {
            self.plan_requests.fetch_add(1, Ordering::SeqCst);
            if self.offline {
                return Err(UpstreamError::Unavailable);
            }
            if self.refuse_plans {
                return Ok(MealPlanResponse::failure("no foods available"));
            }
            Ok(MealPlanResponse::success(MealPlan {
                breakfast: meal("Breakfast", 12),
                lunch: meal("Lunch", 18),
                dinner: meal("Dinner", 25),
                total_protein: 55,
                tips: vec!["Drink water".to_string()],
                protein_goal: Some(protein_goal),
                date: Some("2024-03-01 08:30:00".to_string()),
            }))
        }

        async fn foods(&self) -> Result<FoodDatabase, UpstreamError> {
            if self.offline {
                return Err(UpstreamError::Timeout);
            }
            Ok(FoodDatabase {
                proteins: vec![protein("Chicken", 31)],
                veggies: vec!["Bean Curry".to_string()],
                carbs: vec!["Oats (1 cup)".to_string()],
            })
        }

        async fn health_check(&self) -> Result<(), UpstreamError> {
            if self.offline {
                Err(UpstreamError::Unavailable)
            } else {
                Ok(())
            }
        }
    }

    fn create_test_app(service: Arc<StubService>, static_dir: PathBuf) -> Router {
        let config = ServerConfig {
            static_dir,
            ..ServerConfig::default()
        };
        build_router(AppState::new(service, config))
    }

    fn app_with(service: StubService) -> Router {
        create_test_app(Arc::new(service), PathBuf::from("does-not-exist"))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(app_with(StubService::default()), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_follows_upstream() {
        let response = get(app_with(StubService::default()), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);

        let offline = StubService { offline: true, ..Default::default() };
        let response = get(app_with(offline), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let offline = StubService { offline: true, ..Default::default() };
        let response = get(app_with(offline), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["upstream"], "unreachable");
    }

    #[tokio::test]
    async fn test_tips_default_count() {
        let response = get(app_with(StubService::default()), "/api/tips").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["tips"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_tips_count_validation() {
        let response = get(app_with(StubService::default()), "/api/tips?count=0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get(app_with(StubService::default()), "/api/tips?count=lots").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_meal_plan_success() {
        let response = get(
            app_with(StubService::default()),
            "/api/generate-meal-plan?protein_goal=80",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["total_protein"], 55);
        assert_eq!(body["data"]["protein_goal"], 80);
        assert_eq!(body["data"]["breakfast"]["type"], "Breakfast");
        assert_eq!(body["data"]["dinner"]["protein"]["type"], "Animal");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_meal_plan_application_failure_passes_through() {
        let refusing = StubService { refuse_plans: true, ..Default::default() };
        let response = get(app_with(refusing), "/api/generate-meal-plan?protein_goal=50").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "no foods available");
    }

    #[tokio::test]
    async fn test_meal_plan_out_of_range_goal_not_forwarded() {
        let service = Arc::new(StubService::default());

        for uri in [
            "/api/generate-meal-plan?protein_goal=19",
            "/api/generate-meal-plan?protein_goal=151",
            "/api/generate-meal-plan?protein_goal=-5",
            "/api/generate-meal-plan?protein_goal=5000000000",
        ] {
            let app = create_test_app(Arc::clone(&service), PathBuf::from("does-not-exist"));
            let response = get(app, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "uri {}", uri);

            let body = json_body(response).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["error"], "protein_goal must be between 20 and 150");
        }

        assert_eq!(service.plan_requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_meal_plan_upstream_down() {
        let offline = StubService { offline: true, ..Default::default() };
        let response = get(app_with(offline), "/api/generate-meal-plan").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_UNAVAILABLE");
        assert!(body["request_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_foods() {
        let response = get(app_with(StubService::default()), "/api/foods").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["proteins"][0]["name"], "Chicken");
        assert_eq!(body["proteins"][0]["protein"], 31);
        assert_eq!(body["veggies"][0], "Bean Curry");
    }

    #[tokio::test]
    async fn test_foods_timeout() {
        let offline = StubService { offline: true, ..Default::default() };
        let response = get(app_with(offline), "/api/foods").await;
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_frontend_served_with_index_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>meal planner</html>").unwrap();
        std::fs::write(dir.path().join("style.css"), "body {}").unwrap();

        let service = Arc::new(StubService::default());

        for (uri, expected) in [
            ("/", "<html>meal planner</html>"),
            ("/style.css", "body {}"),
            ("/some/page", "<html>meal planner</html>"),
        ] {
            let app = create_test_app(Arc::clone(&service), dir.path().to_path_buf());
            let response = get(app, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "uri {}", uri);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(std::str::from_utf8(&bytes).unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>meal planner</html>").unwrap();

        let app = create_test_app(Arc::new(StubService::default()), dir.path().to_path_buf());
        let response = get(app, "/api/generate-mealplan").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("/api/generate-mealplan"));
    }
}
