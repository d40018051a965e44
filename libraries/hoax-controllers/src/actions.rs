//! Side effects triggered by form submission.
//!
//! Forms depend on these traits instead of the HTTP client so that a form
//! without wiring degrades to [`NoopActions`].

use async_trait::async_trait;
use hoax_client::{Result, UserApi};
use hoax_core::{LoginCredentials, Session, SignupRequest};
use hoax_session::SessionStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Performs a signup.
#[async_trait]
pub trait SignupActions: Send + Sync {
    async fn post_signup(&self, body: SignupRequest) -> Result<()>;
}

/// Performs a login.
#[async_trait]
pub trait LoginActions: Send + Sync {
    async fn post_login(&self, credentials: LoginCredentials) -> Result<()>;
}

/// Resolves every action successfully without doing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopActions;

#[async_trait]
impl SignupActions for NoopActions {
    async fn post_signup(&self, body: SignupRequest) -> Result<()> {
        debug!(username = %body.username, "No signup action attached");
        Ok(())
    }
}

#[async_trait]
impl LoginActions for NoopActions {
    async fn post_login(&self, credentials: LoginCredentials) -> Result<()> {
        debug!(username = %credentials.username, "No login action attached");
        Ok(())
    }
}

/// Actions backed by the API and the session store.
///
/// A successful signup is followed by a login with the same credentials, so
/// a new user ends up logged in.
pub struct ClientActions {
    api: Arc<dyn UserApi>,
    session: Arc<SessionStore>,
}

impl ClientActions {
    pub fn new(api: Arc<dyn UserApi>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }
}

#[async_trait]
impl SignupActions for ClientActions {
    async fn post_signup(&self, body: SignupRequest) -> Result<()> {
        self.api.post_signup(&body).await?;
        self.post_login(LoginCredentials::new(body.username, body.password))
            .await
    }
}

#[async_trait]
impl LoginActions for ClientActions {
    async fn post_login(&self, credentials: LoginCredentials) -> Result<()> {
        let user = self.api.login(&credentials).await?;
        let session = Session::from_login(user, credentials.password);

        // The in-memory session and header are set even when persisting fails.
        if let Err(e) = self.session.login(session).await {
            warn!(error = %e, "Logged in but could not persist session");
        }
        Ok(())
    }
}
