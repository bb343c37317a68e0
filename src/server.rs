//! HTTP Server and Request Dispatcher
//!
//! One chat endpoint plus read-only support routes:
//!
//! - `POST /api/chat`   - validate, build adapter, generate, wrap
//! - `GET  /api/models` - static provider -> model-list configuration
//! - `GET  /health`     - liveness probe
//!
//! Dispatch stages for `/api/chat`:
//! 1. Validation: unknown mode -> 400; no usable credential -> 401. No
//!    adapter is constructed on either path.
//! 2. Construction: factory failures (unsupported provider, missing
//!    credential) -> 500 with the underlying message.
//! 3. Generation: the adapter never raises; a vendor failure comes back as
//!    a value and is rendered as warning-prefixed text inside a 200
//!    envelope, with a structured `code` field alongside for callers that
//!    want to tell it apart from model output.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ModelsConfig;
use crate::error::ChatError;
use crate::llm::{ChatMessage, ClientFactory, DEFAULT_PROVIDER_ID};
use crate::modes::{ModeCatalog, DEFAULT_MODE};

/// Marker prepended to vendor errors rendered as response text.
pub const VENDOR_ERROR_PREFIX: &str = "⚠️ ";

/// Read-only state shared across all handlers. The factory is a trait
/// object so tests can dispatch against a mock without process-wide setup.
pub struct AppState {
    pub catalog: ModeCatalog,
    pub models: ModelsConfig,
    pub factory: Arc<dyn ClientFactory>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// Set to `"vendor_error"` when `response` carries a rendered vendor
    /// failure instead of generated text. Absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// POST /api/chat - dispatch one chat request to the selected vendor.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    let mode = req.mode.as_deref().unwrap_or(DEFAULT_MODE);
    let system_prompt = state
        .catalog
        .lookup(mode)
        .ok_or_else(|| ChatError::InvalidMode(mode.to_string()))?;

    let provider_id = req.provider.as_deref().unwrap_or(DEFAULT_PROVIDER_ID);
    let api_key = req.api_key.as_deref().unwrap_or("");
    if api_key.is_empty() && !state.factory.has_fallback(provider_id) {
        warn!("Chat request rejected: no API key for provider {}", provider_id);
        return Err(ChatError::MissingCredential);
    }

    let client = state
        .factory
        .create(provider_id, req.model.as_deref(), api_key)?;

    info!(
        "Dispatching chat: provider={}, mode={}, {} messages",
        provider_id,
        mode,
        req.messages.len()
    );

    match client.generate(system_prompt, &req.messages).await {
        Ok(text) => Ok(Json(ChatResponse {
            response: text,
            code: None,
        })),
        // Vendor failures are rendered as text for compatibility with
        // callers that display the response verbatim; `code` lets others
        // tell the cases apart without parsing the prefix.
        Err(e) => {
            warn!("Vendor call failed: {}", e);
            Ok(Json(ChatResponse {
                response: format!("{}{}", VENDOR_ERROR_PREFIX, e),
                code: Some("vendor_error".to_string()),
            }))
        }
    }
}

/// GET /api/models - static provider -> model-list configuration.
pub async fn get_models(State(state): State<Arc<AppState>>) -> Json<ModelsConfig> {
    Json(state.models.clone())
}

/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// Build the application router. CORS is wide open: the browser frontend is
/// served from a different origin.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/models", get(get_models))
        .route("/api/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn run(state: Arc<AppState>, host: &str, port: u16) -> anyhow::Result<()> {
    let app = router(state);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Dr.Debug backend listening on {}", addr);
    info!("  POST /api/chat   - chat completion");
    info!("  GET  /api/models - available models");
    info!("  GET  /health     - health check");

    axum::serve(listener, app).await?;

    Ok(())
}
