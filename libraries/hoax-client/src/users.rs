//! User operations for the Hoaxify API.

use crate::error::{ClientError, Result};
use crate::types::{GenericResponse, API_PREFIX};
use hoax_core::{Page, PageRequest, SignupRequest, User, UserUpdate};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use tracing::debug;
use url::Url;

/// Users client for the Hoaxify API.
///
/// Every request carries `authorization` when one is given.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    authorization: Option<&'a str>,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, authorization: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            authorization,
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.authorization {
            Some(value) => request.header(AUTHORIZATION, value),
            None => request,
        }
    }

    /// `<base>/api/1.0/users/<username>` with the name percent-encoded as one path segment.
    fn user_url(&self, username: &str) -> Result<Url> {
        let mut url = Url::parse(self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(API_PREFIX.trim_start_matches('/').split('/'))
            .push("users")
            .push(username);
        Ok(url)
    }

    /// Fetch one page of users.
    pub async fn list_users(&self, request: PageRequest) -> Result<Page<User>> {
        let url = format!("{}{}/users", self.base_url, API_PREFIX);
        debug!(url = %url, page = request.page, size = request.size, "Fetching users");

        let response = self
            .authorize(self.http.get(&url))
            .query(&[("page", request.page), ("size", request.size)])
            .send()
            .await
            .map_err(ClientError::from_send)?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        let page: Page<User> = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse user page: {}", e))
        })?;

        debug!(
            number = page.number,
            users = page.content.len(),
            first = page.first,
            last = page.last,
            "Fetched users"
        );

        Ok(page)
    }

    /// Get a single user by username.
    pub async fn get_user(&self, username: &str) -> Result<User> {
        let url = self.user_url(username)?;
        debug!(url = %url, username = %username, "Fetching user");

        let response = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user response: {}", e))
            })
        } else if status.as_u16() == 404 {
            Err(ClientError::ServerError {
                status: 404,
                message: format!("User not found: {}", username),
            })
        } else {
            Err(ClientError::from_response(response).await)
        }
    }

    /// Register a new user.
    pub async fn post_signup(&self, body: &SignupRequest) -> Result<()> {
        let url = format!("{}{}/users", self.base_url, API_PREFIX);
        debug!(url = %url, username = %body.username, "Posting signup");

        let response = self
            .authorize(self.http.post(&url))
            .json(body)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        // The acknowledgement body is informational only.
        match response.json::<GenericResponse>().await {
            Ok(ack) => debug!(message = %ack.message, "Signup accepted"),
            Err(e) => debug!(error = %e, "Signup accepted without message"),
        }

        Ok(())
    }

    /// Update the profile of user `id`.
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User> {
        let url = format!("{}{}/users/{}", self.base_url, API_PREFIX, id);
        debug!(url = %url, user_id = id, "Updating user");

        let response = self
            .authorize(self.http.put(&url))
            .json(update)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse update response: {}", e))
        })
    }
}
