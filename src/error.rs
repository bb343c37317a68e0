//! Request-level error taxonomy and HTTP mapping.
//!
//! Validation and construction failures become structured `{"error": ...}`
//! envelopes here. Vendor-call failures never reach this layer: the adapter
//! returns them as values and the dispatcher renders them inside a success
//! envelope (see `server::chat`).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::FactoryError;

/// The error envelope returned for every non-200 outcome.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Terminal failure of a chat request before any vendor call is made.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Caller-supplied mode is not in the catalog.
    #[error("Invalid mode: {0}")]
    InvalidMode(String),
    /// No usable API key at validation time.
    #[error("API key is required")]
    MissingCredential,
    /// Factory failure: unsupported provider or missing credential at
    /// construction time.
    #[error(transparent)]
    Construction(#[from] FactoryError),
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::InvalidMode(_) => StatusCode::BAD_REQUEST,
            ChatError::MissingCredential => StatusCode::UNAUTHORIZED,
            ChatError::Construction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Provider;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ChatError::InvalidMode("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ChatError::MissingCredential.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ChatError::Construction(FactoryError::UnsupportedProvider("gemini".to_string()))
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ChatError::Construction(FactoryError::MissingCredential(Provider::OpenAi)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        assert_eq!(
            ChatError::InvalidMode("unknown".to_string()).to_string(),
            "Invalid mode: unknown"
        );
        assert_eq!(ChatError::MissingCredential.to_string(), "API key is required");
        assert_eq!(
            ChatError::Construction(FactoryError::UnsupportedProvider("gemini".to_string()))
                .to_string(),
            "Unsupported LLM provider: gemini"
        );
    }
}
