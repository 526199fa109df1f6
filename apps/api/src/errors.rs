use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// HTTP status is decided here and nowhere else.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Model response was not valid JSON: {0}")]
    UpstreamParse(String),

    #[error("Model request failed: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => AppError::UpstreamParse(e.to_string()),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamParse(_) | AppError::Upstream(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Validation(msg) => tracing::info!("Rejected request: {msg}"),
            AppError::UpstreamParse(msg) => tracing::error!("Upstream parse error: {msg}"),
            AppError::Upstream(msg) => tracing::error!("Upstream error: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        let body = Json(json!({
            "success": false,
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::Validation("resume_text is required".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "resume_text is required");
    }

    #[test]
    fn test_llm_parse_error_is_distinct_from_transport() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let mapped = AppError::from(LlmError::Parse(parse_err));
        assert!(matches!(mapped, AppError::UpstreamParse(_)));
        assert!(mapped.to_string().starts_with("Model response was not valid JSON"));

        let mapped = AppError::from(LlmError::EmptyContent);
        assert!(matches!(mapped, AppError::Upstream(_)));
    }

    #[test]
    fn test_all_faults_are_internal_server_errors() {
        let errs = [
            AppError::UpstreamParse("x".to_string()),
            AppError::Upstream("x".to_string()),
            AppError::Internal(anyhow::anyhow!("boom")),
        ];
        for err in errs {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
