//! Login form controller.

use crate::actions::{LoginActions, NoopActions};
use crate::navigation::{Navigator, NoopNavigator, HOME};
use crate::SubmitOutcome;
use hoax_core::LoginCredentials;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Fallback when a failed login carries no server message.
pub const LOGIN_FAILED: &str = "Login failed";

/// Field values and request state of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub pending_api_call: bool,
    pub api_error: Option<String>,
}

impl LoginForm {
    /// Both inputs must be filled in.
    pub fn submit_enabled(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Controller behind the login view.
pub struct LoginFormController {
    actions: Arc<dyn LoginActions>,
    navigator: Arc<dyn Navigator>,
    form: Mutex<LoginForm>,
}

impl Default for LoginFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFormController {
    pub fn new() -> Self {
        Self {
            actions: Arc::new(NoopActions),
            navigator: Arc::new(NoopNavigator),
            form: Mutex::new(LoginForm::default()),
        }
    }

    pub fn with_actions(mut self, actions: Arc<dyn LoginActions>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Editing either input clears the last error.
    pub async fn set_username(&self, value: impl Into<String>) {
        let mut form = self.form.lock().await;
        form.username = value.into();
        form.api_error = None;
    }

    pub async fn set_password(&self, value: impl Into<String>) {
        let mut form = self.form.lock().await;
        form.password = value.into();
        form.api_error = None;
    }

    /// Send the login request.
    pub async fn submit(&self) -> SubmitOutcome {
        let credentials = {
            let mut form = self.form.lock().await;
            if form.pending_api_call {
                debug!("Login already in flight");
                return SubmitOutcome::Ignored;
            }
            if !form.submit_enabled() {
                return SubmitOutcome::Disabled;
            }
            form.pending_api_call = true;
            form.api_error = None;
            LoginCredentials::new(form.username.clone(), form.password.clone())
        };

        let username = credentials.username.clone();
        let result = self.actions.post_login(credentials).await;

        {
            let mut form = self.form.lock().await;
            form.pending_api_call = false;

            if let Err(e) = result {
                warn!(username = %username, error = %e, "Login failed");
                let message = e
                    .server_message()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(LOGIN_FAILED);
                form.api_error = Some(message.to_string());
                return SubmitOutcome::Failed;
            }
        }

        info!(username = %username, "Logged in");
        self.navigator.navigate(HOME);
        SubmitOutcome::Succeeded
    }

    /// Snapshot for rendering
    pub async fn form(&self) -> LoginForm {
        self.form.lock().await.clone()
    }
}
