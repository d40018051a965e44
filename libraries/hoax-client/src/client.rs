//! Main Hoaxify API client.

use crate::api::UserApi;
use crate::auth::{AuthClient, AuthHeader};
use crate::error::{ClientError, Result};
use crate::types::ClientConfig;
use crate::users::UsersClient;
use async_trait::async_trait;
use hoax_core::{LoginCredentials, Page, PageRequest, SignupRequest, User, UserUpdate};
use reqwest::Client;
use url::Url;

/// Main client for interacting with a Hoaxify server.
///
/// All requests carry the shared [`AuthHeader`] while it is set.
///
/// # Example
///
/// ```ignore
/// use hoax_client::{AuthHeader, ClientConfig, HoaxClient, UserApi};
/// use hoax_core::PageRequest;
///
/// let auth = AuthHeader::new();
/// let client = HoaxClient::with_auth(ClientConfig::new("http://localhost:8080"), auth.clone())?;
///
/// let page = client.list_users(PageRequest::new(0, 3)?).await?;
/// println!("Page {} of {}", page.number + 1, page.total_pages);
/// ```
#[derive(Debug, Clone)]
pub struct HoaxClient {
    http: Client,
    base_url: String,
    auth: AuthHeader,
}

impl HoaxClient {
    /// Create a new client with its own, initially empty, auth header.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_auth(config, AuthHeader::new())
    }

    /// Create a client that reads the given shared auth header.
    pub fn with_auth(config: ClientConfig, auth: AuthHeader) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Hoaxify/{} (Terminal)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            auth,
        })
    }

    /// Get the normalized server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Handle to the shared auth header.
    pub fn auth(&self) -> &AuthHeader {
        &self.auth
    }

    /// Check if requests are currently authenticated.
    pub async fn is_authenticated(&self) -> bool {
        self.auth.is_set().await
    }
}

#[async_trait]
impl UserApi for HoaxClient {
    async fn list_users(&self, request: PageRequest) -> Result<Page<User>> {
        let authorization = self.auth.value().await;
        UsersClient::new(&self.http, &self.base_url, authorization.as_deref())
            .list_users(request)
            .await
    }

    async fn get_user(&self, username: &str) -> Result<User> {
        let authorization = self.auth.value().await;
        UsersClient::new(&self.http, &self.base_url, authorization.as_deref())
            .get_user(username)
            .await
    }

    async fn post_signup(&self, body: &SignupRequest) -> Result<()> {
        let authorization = self.auth.value().await;
        UsersClient::new(&self.http, &self.base_url, authorization.as_deref())
            .post_signup(body)
            .await
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<User> {
        AuthClient::new(&self.http, &self.base_url)
            .login(credentials)
            .await
    }

    async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User> {
        let authorization = self.auth.value().await;
        UsersClient::new(&self.http, &self.base_url, authorization.as_deref())
            .update_user(id, update)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(HoaxClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(HoaxClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(HoaxClient::new(ClientConfig::new("")).is_err());
        assert!(HoaxClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(HoaxClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = HoaxClient::new(ClientConfig::new("https://example.com/")).expect("valid url");

        // URL should have trailing slash removed
        assert_eq!(client.url(), "https://example.com");
    }
}
