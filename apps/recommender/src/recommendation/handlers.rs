//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::recommendation::pipeline::Recommendation;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub conversation: String,
}

/// POST /api/v1/recommend
///
/// Runs the full pipeline for the submitted text. Empty input is rejected with a
/// warning before any model call; an unparseable extraction response comes back as
/// `PARSE_ERROR` carrying the raw model output.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Recommendation>, AppError> {
    let recommendation = state.recommender.recommend(&request.conversation).await?;
    Ok(Json(recommendation))
}
