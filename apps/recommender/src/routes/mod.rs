pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/recommend", post(handlers::handle_recommend))
        .with_state(state)
}
