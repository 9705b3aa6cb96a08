//! Error taxonomy shared by the gateway and the proxy endpoint.
//!
//! Every failure that reaches a caller is one of the fixed codes below,
//! carried as structured data (code, message, status). Messages are fixed
//! per code and user-actionable; code strings coming off the wire that are
//! not part of the taxonomy normalize to `ApiError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// The closed set of error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidInput,
    RateLimit,
    ApiError,
    AuthError,
    NetworkError,
    Offline,
}

impl ErrorCode {
    /// All codes in the taxonomy.
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::InvalidInput,
        ErrorCode::RateLimit,
        ErrorCode::ApiError,
        ErrorCode::AuthError,
        ErrorCode::NetworkError,
        ErrorCode::Offline,
    ];

    /// Wire name of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::RateLimit => "RATE_LIMIT",
            ErrorCode::ApiError => "API_ERROR",
            ErrorCode::AuthError => "AUTH_ERROR",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::Offline => "OFFLINE",
        }
    }

    /// Parse a wire code. Total: any string outside the taxonomy maps to
    /// `ApiError`, treating the input purely as string data.
    pub fn parse(code: &str) -> ErrorCode {
        match code {
            "INVALID_INPUT" => ErrorCode::InvalidInput,
            "RATE_LIMIT" => ErrorCode::RateLimit,
            "API_ERROR" => ErrorCode::ApiError,
            "AUTH_ERROR" => ErrorCode::AuthError,
            "NETWORK_ERROR" => ErrorCode::NetworkError,
            "OFFLINE" => ErrorCode::Offline,
            _ => ErrorCode::ApiError,
        }
    }

    /// Fixed user-facing message for the code.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Please enter valid text to translate.",
            ErrorCode::RateLimit => "Too many requests. Please wait a moment and try again.",
            ErrorCode::ApiError => {
                "Translation service is temporarily unavailable. Please try again later."
            }
            ErrorCode::AuthError => "Translation service configuration error.",
            ErrorCode::NetworkError => "Network error. Please check your connection and try again.",
            ErrorCode::Offline => "You are offline. Please check your internet connection.",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed user-facing message for an arbitrary code string.
///
/// Unknown codes fall back to the `API_ERROR` message, so the result is
/// always non-empty.
pub fn error_message(code: &str) -> &'static str {
    ErrorCode::parse(code).default_message()
}

/// Structured failure returned by the gateway and the proxy endpoint.
///
/// `status` is the HTTP status the failure maps to; local failures that
/// never produced a response (offline, transport) carry status 0.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{code} ({status}): {message}")]
pub struct TranslationApiError {
    pub code: ErrorCode,
    pub message: String,
    pub status: u16,
}

impl TranslationApiError {
    /// Error with the fixed message for its code.
    pub fn new(code: ErrorCode, status: u16) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
            status,
        }
    }

    /// Error with an explicit message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>, status: u16) -> Self {
        Self {
            code,
            message: message.into(),
            status,
        }
    }
}

impl IntoResponse for TranslationApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
