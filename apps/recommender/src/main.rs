mod catalog;
mod config;
mod embedding;
mod errors;
mod llm_client;
mod recommendation;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::embedding::{Embedder, FastEmbedder};
use crate::llm_client::LlmClient;
use crate::recommendation::explainer::LlmExplainer;
use crate::recommendation::extractor::LlmTraitExtractor;
use crate::recommendation::pipeline::Recommender;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing OPENAI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Path Recommender v{}", env!("CARGO_PKG_VERSION"));

    // Load the career catalog (fatal if missing or malformed)
    let catalog = Arc::new(
        Catalog::load(&config.catalog_path).context("Failed to load career catalog")?,
    );

    // Load the embedding model once; model loading blocks on disk and network
    let embedder = tokio::task::spawn_blocking(FastEmbedder::new)
        .await?
        .context("Failed to load embedding model")?;
    info!(
        "Embedding model ready: {} ({} dims)",
        embedder.model_name(),
        embedder.dimension()
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_api_url.clone())
        .context("Failed to build HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let recommender = Recommender::new(
        catalog,
        Arc::new(embedder),
        Arc::new(LlmTraitExtractor::new(llm.clone())),
        Arc::new(LlmExplainer::new(llm)),
    );

    let state = AppState {
        recommender: Arc::new(recommender),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
