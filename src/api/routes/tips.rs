//! Tip Routes
//!
//! - GET /api/tips?count=N - Random nutrition tips

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{TipsQuery, MAX_TIP_COUNT};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::upstream::TipsResponse;

/// GET /api/tips
pub async fn get_tips(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TipsQuery>,
) -> ApiResult<Json<TipsResponse>> {
    if query.count == 0 || query.count > MAX_TIP_COUNT {
        return Err(ApiError::Validation(format!(
            "count must be between 1 and {}",
            MAX_TIP_COUNT
        )));
    }

    let tips = state.meals.tips(query.count).await?;
    Ok(Json(TipsResponse { tips }))
}
