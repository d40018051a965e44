/// User domain types
use serde::{Deserialize, Deserializer, Serialize};

/// User as shown in lists and returned by login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-side identifier (absent in some list projections)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Unique login name
    pub username: String,

    /// Name shown to other users
    pub display_name: String,

    /// Profile image; the server sends an empty string for "no image"
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image: Option<String>,
}

impl User {
    /// Create a user without id or image
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            display_name: display_name.into(),
            image: None,
        }
    }
}

/// Partial profile update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// New profile image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UserUpdate {
    /// True when the update would change nothing
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.image.is_none()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_projection_with_empty_image() {
        let user: User = serde_json::from_value(serde_json::json!({
            "username": "user1",
            "displayName": "display1",
            "image": ""
        }))
        .unwrap();

        assert_eq!(user, User::new("user1", "display1"));
    }

    #[test]
    fn test_login_view_model() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "username": "user1",
            "displayName": "display1",
            "image": "profile1.png"
        }))
        .unwrap();

        assert_eq!(user.id, Some(1));
        assert_eq!(user.image.as_deref(), Some("profile1.png"));
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = UserUpdate {
            display_name: Some("new name".to_string()),
            image: None,
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "displayName": "new name" }));
        assert!(UserUpdate::default().is_empty());
    }
}
