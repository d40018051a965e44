//! Domain types for the Hoaxify client
mod form;
mod page;
mod session;
mod user;

pub use form::{Field, FieldErrors, LoginCredentials, SignupRequest};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use session::Session;
pub use user::{User, UserUpdate};
