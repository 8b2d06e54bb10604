// LLM prompt templates for the recommendation pipeline.
// Rendered with `llm_client::prompts::render`.

/// Trait extraction prompt. Replace `{conversation}` before sending.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the following from the user's conversation:
- interests
- skills
- personality traits
- career goals

Return JSON with keys: interests, skills, personality_traits, career_goals.

Conversation:
---
{conversation}
---"#;

/// Explanation prompt. Replace `{user_profile}`, `{career_category}` and `{careers}`.
pub const EXPLANATION_PROMPT_TEMPLATE: &str = r#"The user profile is: {user_profile}.
Recommend why the career category {career_category} with roles like {careers} suits the user.

Provide a brief, clear explanation (2–3 sentences)."#;
