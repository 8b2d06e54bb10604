use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status with the loaded catalog size and embedding model.
/// An empty catalog reports `degraded`.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.recommender.catalog();
    let status = if catalog.is_empty() { "degraded" } else { "ok" };

    Json(json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-recommender",
        "catalog_entries": catalog.len(),
        "embedding_model": state.recommender.embedding_model(),
    }))
}
