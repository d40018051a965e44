//! Types for Hoaxify API requests and responses.

use hoax_core::FieldErrors;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path prefix of every API endpoint.
pub const API_PREFIX: &str = "/api/1.0";

/// Configuration for connecting to a Hoaxify server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:8080")
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config with default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Plain acknowledgement, e.g. `{"message": "User saved"}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenericResponse {
    pub message: String,
}

/// Error body returned by the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Present only on 400 responses caused by bean validation
    #[serde(default)]
    pub validation_errors: Option<FieldErrors>,
}
