use std::sync::Arc;

use crate::recommendation::pipeline::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Catalog, embedder and LLM-backed capabilities, built once in `main`.
    pub recommender: Arc<Recommender>,
}
