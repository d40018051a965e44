//! The API surface consumed by the controllers.

use crate::error::Result;
use async_trait::async_trait;
use hoax_core::{LoginCredentials, Page, PageRequest, SignupRequest, User, UserUpdate};

/// Hoaxify API operations.
///
/// Implemented by [`crate::HoaxClient`]; controllers hold it as
/// `Arc<dyn UserApi>` so tests can substitute their own.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch one page of users
    async fn list_users(&self, request: PageRequest) -> Result<Page<User>>;

    /// Get a single user by username
    async fn get_user(&self, username: &str) -> Result<User>;

    /// Register a new user
    async fn post_signup(&self, body: &SignupRequest) -> Result<()>;

    /// Check credentials and return the matching user
    async fn login(&self, credentials: &LoginCredentials) -> Result<User>;

    /// Update the profile of user `id`
    async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User>;
}
