//! Client for the external translation provider.
//!
//! Issues exactly one HTTP request per call and maps every outcome into the
//! shared error taxonomy. Provider-internal error detail is logged here and
//! never surfaces in the returned message.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::{ErrorCode, TranslationApiError};
use crate::language::Language;

#[derive(Debug, Serialize)]
struct ProviderRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    data: ProviderData,
}

#[derive(Debug, Deserialize)]
struct ProviderData {
    translations: Vec<ProviderTranslation>,
}

/// One translation result as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderTranslation {
    pub translated_text: String,
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

pub struct ProviderClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ProviderClient {
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Translate `text` between the two languages of the pair.
    ///
    /// No retries; the caller owns any deadline via the `reqwest::Client` it
    /// supplies.
    pub async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<ProviderTranslation, TranslationApiError> {
        let request = ProviderRequest {
            q: text,
            source: source.code(),
            target: target.code(),
            format: "text",
        };

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if is_transport_error(&e) {
                    error!("Translation provider unreachable: {}", e);
                    TranslationApiError::new(ErrorCode::NetworkError, 503)
                } else {
                    error!("Translation provider request failed: {}", e);
                    TranslationApiError::new(ErrorCode::ApiError, 500)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Translation provider error ({}): {}", status, body);
            return Err(match status.as_u16() {
                429 => TranslationApiError::new(ErrorCode::RateLimit, 429),
                401 | 403 => TranslationApiError::new(ErrorCode::AuthError, status.as_u16()),
                s => TranslationApiError::new(ErrorCode::ApiError, s),
            });
        }

        let parsed: ProviderResponse = response.json().await.map_err(|e| {
            error!("Failed to parse translation provider response: {}", e);
            TranslationApiError::new(ErrorCode::ApiError, 500)
        })?;

        parsed.data.translations.into_iter().next().ok_or_else(|| {
            error!("Translation provider returned no translations");
            TranslationApiError::new(ErrorCode::ApiError, 500)
        })
    }
}

fn is_transport_error(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout() || e.is_request()
}
