//! # Client Error Types
//!
//! Unified error handling for TickTick API operations.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid response: {field} - {reason}")]
    InvalidResponse { field: String, reason: String },
}

impl ClientError {
    /// Create an API error from HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an invalid response error for payloads missing required data.
    pub fn invalid_response(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Map an HTTP status and body to the matching error variant.
    ///
    /// 401 means the access token was rejected, everything else is reported
    /// verbatim as an API error.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            "empty response body".to_string()
        } else {
            body
        };
        if status == 401 {
            Self::AuthError(format!("access token rejected ({message})"))
        } else {
            Self::api_error(status, message)
        }
    }

    /// Whether the error indicates the credential itself is bad.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        match self {
            ClientError::AuthError(_) => true,
            ClientError::ApiError { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}
