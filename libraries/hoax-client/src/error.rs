//! Error types for the Hoaxify client.

use crate::types::ApiErrorBody;
use hoax_core::FieldErrors;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when talking to the Hoaxify API.
///
/// `Validation` is the only structured failure; everything else is opaque to
/// the controllers.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server rejected the request body field by field
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed (invalid credentials)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// Field errors, when the server returned any
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClientError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Message sent by the server, if the failure carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::AuthFailed(message) | ClientError::ServerError { message, .. }
                if !message.is_empty() =>
            {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::ServerUnreachable(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }

    /// Turn a non-success response into an error.
    ///
    /// Bodies carrying `validationErrors` become [`ClientError::Validation`];
    /// 401 becomes [`ClientError::AuthFailed`]; anything else is opaque.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();

        if let Some(errors) = body.validation_errors.filter(|e| !e.is_empty()) {
            warn!(status, fields = errors.len(), "Request rejected by validation");
            return ClientError::Validation(errors);
        }

        let message = body.message.unwrap_or(text);
        warn!(status, message = %message, "Request failed");

        if status == 401 {
            ClientError::AuthFailed(message)
        } else {
            ClientError::ServerError { status, message }
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
