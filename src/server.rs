//! Proxy endpoint: the server-side handler brokering translation requests
//! to the external provider.
//!
//! Validation here mirrors the gateway's local checks. The duplication is
//! deliberate: direct callers can reach this endpoint without going through
//! the gateway.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{ErrorCode, TranslationApiError};
use crate::language::Language;
use crate::provider::ProviderClient;

const MAX_TEXT_CHARS: usize = 5000;

pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
}

/// Success body of `POST /api/translate`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_source_language: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/translate", post(translate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn translate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslateResponse>, TranslationApiError> {
    let Json(body) = body.map_err(|_| {
        TranslationApiError::with_message(
            ErrorCode::InvalidInput,
            "Please enter valid text to translate.",
            400,
        )
    })?;

    let (text, source, target) = validate(&body)?;

    let api_key = match &state.config.provider_api_key {
        Some(key) => key.clone(),
        None => {
            error!("TRANSLATE_API_KEY is not configured; rejecting translation request");
            return Err(TranslationApiError::new(ErrorCode::AuthError, 500));
        }
    };

    let provider = ProviderClient::new(
        state.client.clone(),
        state.config.provider_api_url.clone(),
        api_key,
    );
    let translation = provider.translate(&text, source, target).await?;

    info!(
        "Translated {} chars ({} -> {})",
        text.chars().count(),
        source,
        target
    );

    Ok(Json(TranslateResponse {
        translated_text: translation.translated_text,
        detected_source_language: translation.detected_source_language,
    }))
}

/// Check the request body field by field, in the same order and with the
/// same messages as the gateway's local checks.
fn validate(body: &Value) -> Result<(String, Language, Language), TranslationApiError> {
    let text = match body.get("text") {
        Some(Value::String(text)) => text.clone(),
        _ => {
            return Err(TranslationApiError::with_message(
                ErrorCode::InvalidInput,
                "Please enter valid text to translate.",
                400,
            ))
        }
    };

    if text.trim().is_empty() {
        return Err(TranslationApiError::with_message(
            ErrorCode::InvalidInput,
            "Please enter text to translate.",
            400,
        ));
    }

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(TranslationApiError::with_message(
            ErrorCode::InvalidInput,
            "Text exceeds maximum length of 5000 characters.",
            400,
        ));
    }

    let source = language_field(body, "sourceLanguage")?;
    let target = language_field(body, "targetLanguage")?;

    Ok((text, source, target))
}

fn language_field(body: &Value, field: &str) -> Result<Language, TranslationApiError> {
    match body.get(field).and_then(Value::as_str) {
        Some(code) => Language::from_code(code),
        None => Err(TranslationApiError::with_message(
            ErrorCode::InvalidInput,
            "Invalid language selection.",
            400,
        )),
    }
}
