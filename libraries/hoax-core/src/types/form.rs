//! Form request bodies and server-sourced field errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An input of the signup or login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Display name
    DisplayName,
    /// Login name
    Username,
    /// Password
    Password,
    /// Password confirmation (never sent to the server)
    PasswordRepeat,
}

impl Field {
    /// Name of the field on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Field::DisplayName => "displayName",
            Field::Username => "username",
            Field::Password => "password",
            Field::PasswordRepeat => "passwordRepeat",
        }
    }

    /// Look up a field by its wire name
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "displayName" => Some(Field::DisplayName),
            "username" => Some(Field::Username),
            "password" => Some(Field::Password),
            "passwordRepeat" => Some(Field::PasswordRepeat),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation messages keyed by field wire name.
///
/// A key is present only while its field has an active error. Names the
/// client does not know are kept so they can still be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// No errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for a field, if any
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(field.as_str()).map(String::as_str)
    }

    /// Attach a message to a field
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field.as_str().to_string(), message.into());
    }

    /// Drop a field's message, returning it
    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.0.remove(field.as_str())
    }

    /// True when no field has an error
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with an error
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All messages by wire name, in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Body of the signup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Requested login name
    pub username: String,
    /// Name shown to other users
    pub display_name: String,
    /// Chosen password; the repeat input is checked locally and never sent
    pub password: String,
}

/// Username and password pair used for Basic authentication.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Login name
    pub username: String,
    /// Plaintext password
    pub password: String,
}

impl LoginCredentials {
    /// Pair a username with its password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs.
impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
