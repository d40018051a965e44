//! Plain-text rendering of controller state.

use hoax_controllers::{ListState, LoginForm, SignupForm};
use hoax_core::{Field, Session, User};
use std::fmt::Write;

pub const PREVIOUS: &str = "< previous";
pub const NEXT: &str = "next >";

/// `displayName@username`
pub fn user_line(user: &User) -> String {
    format!("{}@{}", user.display_name, user.username)
}

/// Render the user list with navigation controls that are currently enabled.
pub fn user_list(state: &ListState) -> String {
    let mut out = String::from("Users\n");
    for user in &state.page.content {
        let _ = writeln!(out, "  {}", user_line(user));
    }

    let controls: Vec<&str> = [
        state.has_previous().then_some(PREVIOUS),
        state.has_next().then_some(NEXT),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !controls.is_empty() {
        let _ = writeln!(out, "{}", controls.join("   "));
    }

    if let Some(error) = &state.load_error {
        let _ = writeln!(out, "{error}");
    }
    out
}

/// Prompt listing the keys that do something on the current page.
pub fn list_prompt(state: &ListState) -> String {
    let mut keys = Vec::new();
    if state.has_previous() {
        keys.push("[p]revious");
    }
    if state.has_next() {
        keys.push("[n]ext");
    }
    keys.push("[q]uit");
    format!("{}: ", keys.join(" "))
}

/// One line per server field error, including fields the form does not
/// know, followed by the password mismatch hint.
pub fn signup_errors(form: &SignupForm) -> String {
    let mut out = String::new();
    for (name, message) in form.field_errors.iter() {
        let _ = writeln!(out, "{name}: {message}");
    }
    if let Some(message) = form.password_repeat_error() {
        let _ = writeln!(out, "{}: {message}", Field::PasswordRepeat);
    }
    out
}

pub fn login_error(form: &LoginForm) -> Option<String> {
    form.api_error.clone()
}

/// Profile summary for `whoami` and `show`.
pub fn profile(user: &User) -> String {
    let mut out = user_line(user);
    if let Some(image) = &user.image {
        let _ = write!(out, " [{image}]");
    }
    out
}

pub fn session(session: &Session) -> String {
    if !session.is_logged_in {
        return "Not logged in".to_string();
    }
    let mut out = format!("{}@{}", session.display_name, session.username);
    if let Some(image) = &session.image {
        let _ = write!(out, " [{image}]");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoax_controllers::LoadStatus;
    use hoax_core::{FieldErrors, Page};

    fn users(count: u32) -> Vec<User> {
        (1..=count)
            .map(|i| User::new(format!("user{i}"), format!("display{i}")))
            .collect()
    }

    fn state(page: Page<User>) -> ListState {
        ListState {
            page,
            load_error: None,
            status: LoadStatus::Loaded,
        }
    }

    #[test]
    fn test_user_line() {
        assert_eq!(user_line(&User::new("user1", "display1")), "display1@user1");
    }

    #[test]
    fn test_first_page_shows_only_next() {
        let rendered = user_list(&state(Page::slice(&users(4), 0, 3)));

        assert!(rendered.contains("display1@user1"));
        assert!(rendered.contains("display3@user3"));
        assert!(!rendered.contains("user4"));
        assert!(rendered.contains(NEXT));
        assert!(!rendered.contains(PREVIOUS));
    }

    #[test]
    fn test_last_page_shows_only_previous() {
        let rendered = user_list(&state(Page::slice(&users(4), 1, 3)));

        assert!(rendered.contains("display4@user4"));
        assert!(rendered.contains(PREVIOUS));
        assert!(!rendered.contains(NEXT));
    }

    #[test]
    fn test_single_page_has_no_controls() {
        let list = state(Page::slice(&users(2), 0, 3));
        let rendered = user_list(&list);

        assert!(!rendered.contains(PREVIOUS));
        assert!(!rendered.contains(NEXT));
        assert_eq!(list_prompt(&list), "[q]uit: ");
    }

    #[test]
    fn test_load_error_keeps_users() {
        let mut list = state(Page::slice(&users(4), 1, 3));
        list.load_error = Some("User load failed".to_string());
        list.status = LoadStatus::Errored;

        let rendered = user_list(&list);
        assert!(rendered.contains("display4@user4"));
        assert!(rendered.contains("User load failed"));
    }

    #[test]
    fn test_signup_errors() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Username, "Username cannot be null");
        let form = SignupForm {
            password: "a".to_string(),
            password_repeat: "b".to_string(),
            field_errors: errors,
            ..SignupForm::default()
        };

        let rendered = signup_errors(&form);
        assert!(rendered.contains("username: Username cannot be null"));
        assert!(rendered.contains("passwordRepeat: Does not match to password"));
    }

    #[test]
    fn test_signup_errors_keep_unknown_fields() {
        let errors: FieldErrors = [
            ("email".to_string(), "Cannot be null".to_string()),
            ("displayName".to_string(), "Too short".to_string()),
        ]
        .into_iter()
        .collect();
        let form = SignupForm {
            field_errors: errors,
            ..SignupForm::default()
        };

        let rendered = signup_errors(&form);
        assert!(rendered.contains("email: Cannot be null"));
        assert!(rendered.contains("displayName: Too short"));
        assert!(!rendered.contains("passwordRepeat"));
    }

    #[test]
    fn test_anonymous_session() {
        assert_eq!(session(&Session::anonymous()), "Not logged in");
    }
}
