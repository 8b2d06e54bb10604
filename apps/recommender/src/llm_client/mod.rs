//! LLM Client — the single point of entry for all chat-completion calls in the recommender.
//!
//! No other module talks to the OpenAI API directly; trait extraction and explanation
//! both go through `LlmClient`.
//!
//! Model: gpt-3.5-turbo at temperature 0.5 (constants, not configuration).
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for every LLM call.
pub const MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f32 = 0.5;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Text of the first choice, if the model returned any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Thin wrapper over the Chat Completions endpoint. One request per call, no retries.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            api_url,
        })
    }

    /// Makes a raw call to the chat-completion API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: Option<&str>) -> Result<ChatResponse, LlmError> {
        let request_body = build_request(prompt, system);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }

    /// Calls the LLM and returns the text of the first choice verbatim.
    pub async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

fn build_request<'a>(prompt: &'a str, system: Option<&'a str>) -> ChatRequest<'a> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system {
        messages.push(ChatMessage {
            role: "system",
            content: system,
        });
    }
    messages.push(ChatMessage {
        role: "user",
        content: prompt,
    });

    ChatRequest {
        model: MODEL,
        temperature: TEMPERATURE,
        messages,
    }
}

/// Pulls `error.message` out of an OpenAI error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<OpenAiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match stripped {
        Some(inner) => inner
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(inner.trim_start()),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{completion_body, mock_llm_client, CHAT_COMPLETIONS_PATH};
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_build_request_without_system_has_single_user_message() {
        let request = build_request("hello", None);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], MODEL);
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert!((json["temperature"].as_f64().unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_build_request_with_system_puts_system_first() {
        let request = build_request("hello", Some("be terse"));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "be terse");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn test_chat_response_text_reads_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("first"));
        assert_eq!(response.usage.unwrap().completion_tokens, 2);
    }

    #[test]
    fn test_chat_response_text_none_when_blank_or_missing() {
        let blank: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": "  "}}]}"#).unwrap();
        assert_eq!(blank.text(), None);

        let missing: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(missing.text(), None);

        let empty: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn test_api_error_message_prefers_structured_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            api_error_message(body.to_string()),
            "Incorrect API key provided"
        );
        assert_eq!(api_error_message("gateway down".to_string()), "gateway down");
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_and_returns_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", CHAT_COMPLETIONS_PATH)
            .match_header("authorization", "Bearer sk-test")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-3.5-turbo",
                "temperature": 0.5,
                "messages": [{"role": "user", "content": "hello"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("Hi there"))
            .create_async()
            .await;

        let client = mock_llm_client(&server);
        let text = client.complete("hello", None).await.unwrap();

        assert_eq!(text, "Hi there");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_maps_unauthorized_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", CHAT_COMPLETIONS_PATH)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = mock_llm_client(&server);
        let err = client.complete("hello", None).await.unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        // One request only, no retries.
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_blank_content_is_empty_content_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", CHAT_COMPLETIONS_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("   "))
            .create_async()
            .await;

        let client = mock_llm_client(&server);
        let err = client.complete("hello", None).await.unwrap_err();

        assert!(matches!(err, LlmError::EmptyContent));
    }
}
