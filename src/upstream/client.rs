//! Meal-Plan Service HTTP Client

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::types::{FoodDatabase, MealPlanResponse, TipsResponse};
use super::{MealService, UpstreamError};
use crate::config::UpstreamConfig;

/// REST client for the meal-plan service
pub struct MealApiClient {
    client: Client,
    config: UpstreamConfig,
}

impl MealApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "Calling meal-plan service");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(classify)?;

        let response = check_status(response).await?;
        response.json().await.map_err(UpstreamError::from)
    }
}

fn classify(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else if e.is_connect() {
        UpstreamError::Unavailable
    } else {
        UpstreamError::Request(e)
    }
}

async fn check_status(response: Response) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(UpstreamError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl MealService for MealApiClient {
    async fn tips(&self, count: u32) -> Result<Vec<String>, UpstreamError> {
        let response: TipsResponse = self
            .get_json("/api/tips", &[("count", count.to_string())])
            .await?;
        Ok(response.tips)
    }

    async fn generate_meal_plan(&self, protein_goal: u32) -> Result<MealPlanResponse, UpstreamError> {
        self.get_json(
            "/api/generate-meal-plan",
            &[("protein_goal", protein_goal.to_string())],
        )
        .await
    }

    async fn foods(&self) -> Result<FoodDatabase, UpstreamError> {
        self.get_json("/api/foods", &[]).await
    }

    async fn health_check(&self) -> Result<(), UpstreamError> {
        // The service has no dedicated probe; the food list is its cheapest call
        self.foods().await.map(|_| ())
    }
}
