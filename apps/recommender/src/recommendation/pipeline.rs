//! Recommendation pipeline — orchestrates one request end to end.
//!
//! Flow: validate input → extract traits (LLM) → parse profile → embed profile →
//!       match against catalog → explain (LLM) → return `Recommendation`.
//!
//! Every step is awaited in order. A parse failure stops the request before any
//! embedding, matching or explanation work happens.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::embedding::{Embedder, EmbeddingError};
use crate::llm_client::LlmError;
use crate::recommendation::explainer::Explainer;
use crate::recommendation::extractor::TraitExtractor;
use crate::recommendation::matcher::match_career;
use crate::recommendation::profile::UserProfile;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("empty input")]
    EmptyInput,

    #[error("Could not parse model response: {reason}")]
    Parse { raw: String, reason: String },

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Career catalog is empty")]
    EmptyCatalog,
}

/// Result of one successful request.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub request_id: Uuid,
    pub category: String,
    pub careers: Vec<String>,
    pub score: f32,
    pub explanation: String,
    pub profile_text: String,
}

/// Long-lived pipeline services, built once at startup and shared across requests.
pub struct Recommender {
    catalog: Arc<Catalog>,
    embedder: Arc<dyn Embedder>,
    extractor: Arc<dyn TraitExtractor>,
    explainer: Arc<dyn Explainer>,
}

impl Recommender {
    pub fn new(
        catalog: Arc<Catalog>,
        embedder: Arc<dyn Embedder>,
        extractor: Arc<dyn TraitExtractor>,
        explainer: Arc<dyn Explainer>,
    ) -> Self {
        Self {
            catalog,
            embedder,
            extractor,
            explainer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn embedding_model(&self) -> &str {
        self.embedder.model_name()
    }

    /// Runs the full pipeline for one piece of user text.
    ///
    /// Everything after the empty-input check runs inside a `recommend` span carrying
    /// the request id.
    pub async fn recommend(&self, conversation: &str) -> Result<Recommendation, RecommendError> {
        if conversation.trim().is_empty() {
            return Err(RecommendError::EmptyInput);
        }

        let request_id = Uuid::new_v4();
        let span = info_span!("recommend", %request_id);

        async move {
            let result = self.run(request_id, conversation).await;
            if let Err(e @ (RecommendError::Llm(_) | RecommendError::Embedding(_))) = &result {
                error!("Recommendation failed: {e}");
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        request_id: Uuid,
        conversation: &str,
    ) -> Result<Recommendation, RecommendError> {
        // Step 1: extract traits
        info!("Extracting traits ({} chars)", conversation.len());
        let raw = self.extractor.extract(conversation).await?;

        let profile = match UserProfile::parse(&raw) {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Trait extraction response is not valid JSON: {e}");
                return Err(RecommendError::Parse {
                    raw,
                    reason: e.to_string(),
                });
            }
        };

        // Step 2: embed the profile
        let profile_text = profile.to_text();
        let user_vector = self.embedder.embed(&profile_text).await?;

        // Step 3: best-fit career path
        let best = match_career(&user_vector, &self.catalog, self.embedder.as_ref())
            .await?
            .ok_or(RecommendError::EmptyCatalog)?;
        info!("Matched {} (score {:.3})", best.career.category, best.score);

        // Step 4: explanation
        let explanation = self.explainer.explain(&profile_text, best.career).await?;

        Ok(Recommendation {
            request_id,
            category: best.career.category.clone(),
            careers: best.career.careers.clone(),
            score: best.score,
            explanation,
            profile_text,
        })
    }
}
