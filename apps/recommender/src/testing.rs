//! Deterministic stand-ins for the pipeline's capabilities. Test-only.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::catalog::{CareerPath, Catalog};
use crate::embedding::{Embedder, Embedding, EmbeddingError};
use crate::llm_client::{LlmClient, LlmError};
use crate::recommendation::explainer::Explainer;
use crate::recommendation::extractor::TraitExtractor;

const BAG_DIMENSION: usize = 64;

/// Bag-of-words embedder: each lowercase word bumps one bucket.
/// Identical texts embed identically; texts with disjoint words rarely overlap.
#[derive(Default)]
pub struct BagOfWordsEmbedder {
    calls: AtomicUsize,
}

impl BagOfWordsEmbedder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn vector(text: &str) -> Embedding {
        let mut v = vec![0.0; BAG_DIMENSION];
        for word in text.split_whitespace() {
            let word = word.to_lowercase();
            let bucket = word
                .bytes()
                .fold(7usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
                % BAG_DIMENSION;
            v[bucket] += 1.0;
        }
        v
    }
}

#[async_trait]
impl Embedder for BagOfWordsEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::vector(text))
    }

    fn dimension(&self) -> usize {
        BAG_DIMENSION
    }

    fn model_name(&self) -> &str {
        "bag-of-words"
    }
}

/// Extractor that always answers with the same text.
pub struct FixedExtractor {
    response: String,
    calls: AtomicUsize,
}

impl FixedExtractor {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TraitExtractor for FixedExtractor {
    async fn extract(&self, _conversation: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Extractor whose upstream always fails.
pub struct FailingExtractor;

#[async_trait]
impl TraitExtractor for FailingExtractor {
    async fn extract(&self, _conversation: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        })
    }
}

/// Explainer that names the category it was asked about.
#[derive(Default)]
pub struct EchoExplainer {
    calls: AtomicUsize,
}

impl EchoExplainer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Explainer for EchoExplainer {
    async fn explain(&self, _profile_text: &str, career: &CareerPath) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{} suits you.", career.category))
    }
}

pub fn career(category: &str, careers: &[&str]) -> CareerPath {
    CareerPath {
        category: category.to_string(),
        careers: careers.iter().map(|c| c.to_string()).collect(),
    }
}

/// The two-entry catalog used across tests.
pub fn engineering_and_art() -> Catalog {
    Catalog::new(vec![
        career("Engineering", &["Software Engineer"]),
        career("Art", &["Painter"]),
    ])
}

/// OpenAI-shaped chat completion body whose first choice says `content`.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}],
        "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
    })
    .to_string()
}

/// Client pointed at a local mock server's chat-completions path.
pub fn mock_llm_client(server: &mockito::Server) -> LlmClient {
    LlmClient::new(
        "sk-test".to_string(),
        format!("{}{}", server.url(), CHAT_COMPLETIONS_PATH),
    )
    .unwrap()
}

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
