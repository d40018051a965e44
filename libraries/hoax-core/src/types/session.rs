/// Authenticated session record
use crate::error::Result;
use crate::types::{LoginCredentials, User, UserUpdate};
use serde::{Deserialize, Serialize};

/// The locally persisted identity of the current user.
///
/// The record is stored verbatim, plaintext password included, because every
/// request authenticates with Basic credentials rebuilt from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Server-side user id (0 when anonymous)
    #[serde(default)]
    pub id: i64,

    /// Login name
    #[serde(default)]
    pub username: String,

    /// Name shown in the UI
    #[serde(default)]
    pub display_name: String,

    /// Profile image
    #[serde(default)]
    pub image: Option<String>,

    /// Plaintext password used to rebuild the Basic header
    #[serde(default)]
    pub password: String,

    /// Whether this record represents a logged-in user
    #[serde(default)]
    pub is_logged_in: bool,
}

impl Session {
    /// The anonymous sentinel
    pub fn anonymous() -> Self {
        Self {
            id: 0,
            username: String::new(),
            display_name: String::new(),
            image: None,
            password: String::new(),
            is_logged_in: false,
        }
    }

    /// Build a logged-in session from the user returned by login.
    pub fn from_login(user: User, password: impl Into<String>) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            username: user.username,
            display_name: user.display_name,
            image: user.image,
            password: password.into(),
            is_logged_in: true,
        }
    }

    /// Credentials for the Basic header
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials::new(&self.username, &self.password)
    }

    /// Merge a profile update into this session
    pub fn apply(&mut self, update: &UserUpdate) {
        if let Some(display_name) = &update.display_name {
            self.display_name.clone_from(display_name);
        }
        if let Some(image) = &update.image {
            self.image = Some(image.clone()).filter(|s| !s.is_empty());
        }
    }

    /// Serialize to the stored JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the stored JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
