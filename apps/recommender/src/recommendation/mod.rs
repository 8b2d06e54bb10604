// Career recommendation: trait extraction, profile embedding, catalog matching, explanation.
// All LLM calls go through llm_client; embeddings go through the `Embedder` trait.

pub mod explainer;
pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod pipeline;
pub mod profile;
pub mod prompts;
