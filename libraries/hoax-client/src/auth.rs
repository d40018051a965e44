//! Authentication for the Hoaxify API.

use crate::error::{ClientError, Result};
use crate::types::API_PREFIX;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hoax_core::{LoginCredentials, User};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Build the `Authorization` value for Basic credentials.
pub fn basic_authorization(credentials: &LoginCredentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Default `Authorization` header shared by every request.
///
/// Cloning yields another handle to the same value. The session store is the
/// only writer.
#[derive(Debug, Clone, Default)]
pub struct AuthHeader {
    value: Arc<RwLock<Option<String>>>,
}

impl AuthHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate subsequent requests with Basic credentials.
    pub async fn set_basic(&self, credentials: &LoginCredentials) {
        *self.value.write().await = Some(basic_authorization(credentials));
        debug!(username = %credentials.username, "Authorization header set");
    }

    /// Stop authenticating requests.
    pub async fn clear(&self) {
        *self.value.write().await = None;
        debug!("Authorization header cleared");
    }

    /// Current header value
    pub async fn value(&self) -> Option<String> {
        self.value.read().await.clone()
    }

    pub async fn is_set(&self) -> bool {
        self.value.read().await.is_some()
    }
}

/// Authentication client for the Hoaxify API.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with username and password.
    ///
    /// The credentials travel as an explicit Basic header, independent of the
    /// shared one. Returns the logged-in user on success.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User> {
        let url = format!("{}{}/login", self.base_url, API_PREFIX);
        debug!(url = %url, username = %credentials.username, "Attempting login");

        let response = self
            .http
            .post(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await
            .map_err(ClientError::from_send)?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        let user: User = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse login response: {}", e))
        })?;

        info!(username = %user.username, user_id = ?user.id, "Login successful");
        Ok(user)
    }
}
