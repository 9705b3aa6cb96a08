//! In-process translation gateway.
//!
//! Front-ends the proxy endpoint with local validation and a connectivity
//! check, and normalizes every failure into the shared error taxonomy. No
//! retries are performed here; retry policy is a caller concern.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ErrorCode, TranslationApiError};
use crate::language::Language;

const MAX_TEXT_CHARS: usize = 5000;

/// Connectivity probe consulted before any network call.
///
/// Injected at construction time so callers (and tests) control it instead
/// of the gateway reading ambient state.
pub trait Connectivity: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Default probe for environments without a connectivity signal.
pub struct AssumeOnline;

impl Connectivity for AssumeOnline {
    fn is_online(&self) -> bool {
        true
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GatewayRequest<'a> {
    text: &'a str,
    source_language: Language,
    target_language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GatewayResponse {
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

/// Error body of a proxy response. Both fields are optional so a degraded
/// or foreign body still maps into the taxonomy.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// A successful translation as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
    pub detected_source_language: Option<String>,
}

pub struct TranslationGateway {
    client: reqwest::Client,
    endpoint_url: String,
    connectivity: Arc<dyn Connectivity>,
}

impl TranslationGateway {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self::with_connectivity(endpoint_url, Arc::new(AssumeOnline))
    }

    pub fn with_connectivity(
        endpoint_url: impl Into<String>,
        connectivity: Arc<dyn Connectivity>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url: endpoint_url.into(),
            connectivity,
        }
    }

    /// Translate `text` from `source` to `target` via the proxy endpoint.
    ///
    /// Local checks run in order before any network I/O: connectivity, then
    /// emptiness after trimming, then the character limit. Codes coming back
    /// from the proxy are passed through; this layer never invents new ones.
    pub async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<TranslationResult, TranslationApiError> {
        if !self.connectivity.is_online() {
            return Err(TranslationApiError::new(ErrorCode::Offline, 0));
        }

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

        let request = GatewayRequest {
            text,
            source_language: source,
            target_language: target,
        };

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Translation endpoint unreachable: {}", e);
                TranslationApiError::new(ErrorCode::NetworkError, 0)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let code = body
                .code
                .as_deref()
                .map(ErrorCode::parse)
                .unwrap_or(ErrorCode::ApiError);
            let message = match body.message {
                Some(message) if !message.is_empty() => message,
                _ => code.default_message().to_string(),
            };
            return Err(TranslationApiError {
                code,
                message,
                status: status.as_u16(),
            });
        }

        let parsed: GatewayResponse = response.json().await.map_err(|e| {
            warn!("Failed to decode translation response: {}", e);
            TranslationApiError::new(ErrorCode::ApiError, 500)
        })?;

        Ok(TranslationResult {
            translated_text: parsed.translated_text,
            detected_source_language: parsed.detected_source_language,
        })
    }
}
