//! HTTP API Client
//!
//! Functions for communicating with the meal planner REST API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::types::{FoodDatabase, MealPlanResponse, TipsResponse};

/// Local storage key that overrides the API origin
pub const API_URL_STORAGE_KEY: &str = "meal_planner_api_url";

/// Used when no window is available
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the API base URL: local storage override, else the page origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| {
            let stored = window
                .local_storage()
                .ok()
                .flatten()
                .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten());
            stored.or_else(|| window.location().origin().ok())
        })
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    normalize_base(&url)
}

fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

async fn send_get(url: &str) -> Result<Response, String> {
    Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch `count` nutrition tips
pub async fn fetch_tips(count: u32) -> Result<Vec<String>, String> {
    let api_base = get_api_base();

    let response = send_get(&format!("{}/api/tips?count={}", api_base, count)).await?;
    if !response.ok() {
        return Err(format!("Network error: HTTP {}", response.status()));
    }

    let result: TipsResponse = parse_json(response).await?;
    Ok(result.tips)
}

/// Request a meal plan for the given protein goal
///
/// Application failures come back as `Ok` with `success == false`.
pub async fn generate_meal_plan(protein_goal: u32) -> Result<MealPlanResponse, String> {
    let api_base = get_api_base();

    let response = send_get(&format!(
        "{}/api/generate-meal-plan?protein_goal={}",
        api_base, protein_goal
    ))
    .await?;

    if !response.ok() {
        return Err(format!("Network error: HTTP {}", response.status()));
    }

    parse_json(response).await
}

/// Fetch the food database
pub async fn fetch_foods() -> Result<FoodDatabase, String> {
    let api_base = get_api_base();

    let response = send_get(&format!("{}/api/foods", api_base)).await?;
    if !response.ok() {
        return Err(format!("Network error: HTTP {}", response.status()));
    }

    parse_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://localhost:5000/"), "http://localhost:5000");
        assert_eq!(normalize_base("http://localhost:5000//"), "http://localhost:5000");
        assert_eq!(normalize_base("https://meals.example"), "https://meals.example");
    }
}
