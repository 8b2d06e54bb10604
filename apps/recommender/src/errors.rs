use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::recommendation::pipeline::RecommendError;

/// User-facing message for an unparseable trait-extraction response.
pub const PARSE_ERROR_MESSAGE: &str =
    "Could not parse model response. Try rephrasing your input.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Parse error: {reason}")]
    Parse { raw: String, reason: String },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RecommendError> for AppError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::EmptyInput => AppError::EmptyInput,
            RecommendError::Parse { raw, reason } => AppError::Parse { raw, reason },
            RecommendError::Llm(e) => AppError::Llm(e.to_string()),
            RecommendError::Embedding(e) => AppError::Embedding(e.to_string()),
            RecommendError::EmptyCatalog => {
                AppError::Internal(anyhow::anyhow!("Career catalog is empty"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, level, message) = match &self {
            AppError::EmptyInput => (
                StatusCode::BAD_REQUEST,
                "EMPTY_INPUT",
                "warning",
                "Please enter some input.".to_string(),
            ),
            AppError::Parse { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PARSE_ERROR",
                "error",
                PARSE_ERROR_MESSAGE.to_string(),
            ),
            // Upstream detail is logged by the pipeline, inside the request span.
            AppError::Llm(_) => (
                StatusCode::BAD_GATEWAY,
                "LLM_ERROR",
                "error",
                "The language model request failed. Please try again.".to_string(),
            ),
            AppError::Embedding(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EMBEDDING_ERROR",
                "error",
                "An embedding error occurred".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "error",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "level": level,
            "message": message,
        });
        if let AppError::Parse { raw, .. } = &self {
            error["raw_response"] = json!(raw);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
