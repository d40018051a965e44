//! Hoaxify Controllers
//!
//! Headless view controllers for the Hoaxify client.
//!
//! Each controller owns the render state of one view and exposes the user
//! interactions as async methods. Rendering is left to the front end, which
//! reads snapshots via `state()` / `form()`.
//!
//! - [`UserListController`]: paged user list with next/previous navigation
//! - [`SignupFormController`]: signup form with per-field server errors
//! - [`LoginFormController`]: login form
//!
//! Side effects go through [`SignupActions`] / [`LoginActions`] and
//! [`Navigator`]; [`ClientActions`] wires them to the API and the session
//! store.

mod actions;
mod list;
mod login;
mod navigation;
mod signup;

#[cfg(test)]
mod test_support;

pub use actions::{ClientActions, LoginActions, NoopActions, SignupActions};
pub use list::{ListState, LoadOutcome, LoadStatus, UserListController, USER_LOAD_FAILED};
pub use login::{LoginForm, LoginFormController, LOGIN_FAILED};
pub use navigation::{MemoryNavigator, Navigator, NoopNavigator, HOME};
pub use signup::{SignupForm, SignupFormController, PASSWORD_MISMATCH};

/// Result of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was already in flight; nothing was sent
    Ignored,
    /// The form cannot be submitted in its current state
    Disabled,
    /// The request succeeded
    Succeeded,
    /// The server rejected individual fields
    Rejected,
    /// The request failed without field errors
    Failed,
}
