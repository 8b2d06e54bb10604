//! Text embedding — maps text to a fixed-length vector with a pre-trained sentence model.
//!
//! `AppState` holds an `Arc<dyn Embedder>`. Production uses `FastEmbedder`
//! (all-MiniLM-L6-v2 through fastembed/ONNX); tests substitute deterministic stand-ins.

use std::sync::Arc;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use thiserror::Error;
use tracing::{debug, info};

/// A dense text embedding.
pub type Embedding = Vec<f32>;

/// Identifier of the model behind `FastEmbedder`.
pub const MODEL_NAME: &str = "all-MiniLM-L6-v2";
const MODEL_DIMENSION: usize = 384;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model error: {0}")]
    Model(String),

    #[error("embedding task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// Capability to turn text into an embedding.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError>;

    fn dimension(&self) -> usize;

    fn model_name(&self) -> &str;
}

/// Local sentence-transformer embedder. The model is loaded once, at construction.
pub struct FastEmbedder {
    model: Arc<TextEmbedding>,
}

impl FastEmbedder {
    /// Loads (downloading on first use) the all-MiniLM-L6-v2 model. Blocking.
    pub fn new() -> Result<Self, EmbeddingError> {
        info!("Loading embedding model {MODEL_NAME}");
        let model = TextEmbedding::try_new(InitOptions::new(EmbeddingModel::AllMiniLML6V2))
            .map_err(|e| EmbeddingError::Model(e.to_string()))?;
        Ok(Self {
            model: Arc::new(model),
        })
    }
}

#[async_trait]
impl Embedder for FastEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let model = Arc::clone(&self.model);
        let documents = vec![text.to_string()];

        // ONNX inference is CPU-bound; keep it off the async workers.
        let mut embeddings = tokio::task::spawn_blocking(move || model.embed(documents, None))
            .await?
            .map_err(|e| EmbeddingError::Model(e.to_string()))?;

        let embedding = embeddings
            .pop()
            .ok_or_else(|| EmbeddingError::Model("model returned no embedding".to_string()))?;

        if embedding.len() != MODEL_DIMENSION {
            return Err(EmbeddingError::DimensionMismatch {
                left: embedding.len(),
                right: MODEL_DIMENSION,
            });
        }

        debug!("Embedded {} chars", text.len());
        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        MODEL_DIMENSION
    }

    fn model_name(&self) -> &str {
        MODEL_NAME
    }
}

/// Cosine similarity of two equal-length vectors, clamped to [-1, 1].
/// A zero-norm vector has similarity 0.0 with everything.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0) as f32)
}
