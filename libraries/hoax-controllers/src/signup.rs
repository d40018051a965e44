//! Signup form controller.

use crate::actions::{NoopActions, SignupActions};
use crate::navigation::{Navigator, NoopNavigator, HOME};
use crate::SubmitOutcome;
use hoax_core::{Field, FieldErrors, SignupRequest};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Shown under the repeat input while the two passwords differ.
pub const PASSWORD_MISMATCH: &str = "Does not match to password";

/// Field values and request state of the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub display_name: String,
    pub username: String,
    pub password: String,
    pub password_repeat: String,
    pub pending_api_call: bool,
    pub field_errors: FieldErrors,
}

impl SignupForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::DisplayName => &self.display_name,
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::PasswordRepeat => &self.password_repeat,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::DisplayName => &mut self.display_name,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
            Field::PasswordRepeat => &mut self.password_repeat,
        }
    }

    /// Submission is offered only while both passwords match.
    pub fn submit_enabled(&self) -> bool {
        self.password == self.password_repeat
    }

    /// Client-side mismatch hint for the repeat input
    pub fn password_repeat_error(&self) -> Option<&'static str> {
        (!self.submit_enabled()).then_some(PASSWORD_MISMATCH)
    }

    /// Server error for a field
    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(field)
    }

    fn request(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            password: self.password.clone(),
        }
    }
}

/// Controller behind the signup view.
///
/// At most one signup request is in flight: `submit` while one is pending
/// returns [`SubmitOutcome::Ignored`] without calling the actions.
pub struct SignupFormController {
    actions: Arc<dyn SignupActions>,
    navigator: Arc<dyn Navigator>,
    form: Mutex<SignupForm>,
}

impl Default for SignupFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupFormController {
    /// A form with no-op actions and navigation.
    pub fn new() -> Self {
        Self {
            actions: Arc::new(NoopActions),
            navigator: Arc::new(NoopNavigator),
            form: Mutex::new(SignupForm::default()),
        }
    }

    pub fn with_actions(mut self, actions: Arc<dyn SignupActions>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Update one input. Clears that input's server error, and only that one.
    pub async fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut form = self.form.lock().await;
        *form.value_mut(field) = value.into();
        if form.field_errors.clear(field).is_some() {
            debug!(field = %field, "Cleared field error");
        }
    }

    /// Send the signup request.
    pub async fn submit(&self) -> SubmitOutcome {
        let body = {
            let mut form = self.form.lock().await;
            if form.pending_api_call {
                debug!("Signup already in flight");
                return SubmitOutcome::Ignored;
            }
            if !form.submit_enabled() {
                debug!("Signup disabled: passwords differ");
                return SubmitOutcome::Disabled;
            }
            form.pending_api_call = true;
            form.request()
        };

        let username = body.username.clone();
        let result = self.actions.post_signup(body).await;

        let outcome = {
            let mut form = self.form.lock().await;
            form.pending_api_call = false;

            match result {
                Ok(()) => {
                    form.field_errors = FieldErrors::new();
                    SubmitOutcome::Succeeded
                }
                Err(e) => match e.field_errors() {
                    Some(errors) => {
                        debug!(fields = errors.len(), "Signup rejected");
                        form.field_errors = errors.clone();
                        SubmitOutcome::Rejected
                    }
                    None => {
                        warn!(error = %e, "Signup failed");
                        SubmitOutcome::Failed
                    }
                },
            }
        };

        if outcome == SubmitOutcome::Succeeded {
            info!(username = %username, "Signed up");
            self.navigator.navigate(HOME);
        }
        outcome
    }

    /// Snapshot for rendering
    pub async fn form(&self) -> SignupForm {
        self.form.lock().await.clone()
    }
}
