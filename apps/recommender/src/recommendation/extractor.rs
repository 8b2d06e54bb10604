//! Trait extraction — asks the LLM to turn free text into the four profile traits.
//!
//! The response is returned raw; `UserProfile::parse` decides whether it is usable.

use async_trait::async_trait;

use crate::llm_client::prompts::{render, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::recommendation::prompts::EXTRACT_PROMPT_TEMPLATE;

#[async_trait]
pub trait TraitExtractor: Send + Sync {
    /// Returns the model's raw response to the extraction prompt.
    async fn extract(&self, conversation: &str) -> Result<String, LlmError>;
}

/// Extractor backed by the hosted chat model.
pub struct LlmTraitExtractor {
    llm: LlmClient,
}

impl LlmTraitExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TraitExtractor for LlmTraitExtractor {
    async fn extract(&self, conversation: &str) -> Result<String, LlmError> {
        let prompt = extraction_prompt(conversation);
        self.llm.complete(&prompt, Some(JSON_ONLY_SYSTEM)).await
    }
}

fn extraction_prompt(conversation: &str) -> String {
    render(EXTRACT_PROMPT_TEMPLATE, &[("conversation", conversation)])
}
