//! Explanation generation — a short, prose justification of the matched career path.

use async_trait::async_trait;

use crate::catalog::CareerPath;
use crate::llm_client::prompts::render;
use crate::llm_client::{LlmClient, LlmError};
use crate::recommendation::prompts::EXPLANATION_PROMPT_TEMPLATE;

#[async_trait]
pub trait Explainer: Send + Sync {
    /// Returns a 2–3 sentence explanation of why `career` suits the profile.
    async fn explain(&self, profile_text: &str, career: &CareerPath) -> Result<String, LlmError>;
}

pub struct LlmExplainer {
    llm: LlmClient,
}

impl LlmExplainer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Explainer for LlmExplainer {
    async fn explain(&self, profile_text: &str, career: &CareerPath) -> Result<String, LlmError> {
        let prompt = explanation_prompt(profile_text, career);
        let text = self.llm.complete(&prompt, None).await?;
        Ok(text.trim().to_string())
    }
}

fn explanation_prompt(profile_text: &str, career: &CareerPath) -> String {
    let careers = career.careers.join(", ");
    render(
        EXPLANATION_PROMPT_TEMPLATE,
        &[
            ("career_category", career.category.as_str()),
            ("careers", careers.as_str()),
            ("user_profile", profile_text),
        ],
    )
}
