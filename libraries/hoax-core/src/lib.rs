//! Hoaxify Core
//!
//! Platform-agnostic domain types and error handling for the Hoaxify client.
//!
//! This crate provides the building blocks shared by the HTTP client, the
//! session store, and the view controllers.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Page`, `User`, `Session`, `SignupRequest`, etc.
//! - **Form Types**: `Field` and the server-sourced `FieldErrors` map
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use hoax_core::{Page, User};
//!
//! let users: Vec<User> = (1..=4)
//!     .map(|i| User::new(format!("user{i}"), format!("display{i}")))
//!     .collect();
//!
//! let page = Page::slice(&users, 0, 3);
//! assert_eq!(page.content.len(), 3);
//! assert!(page.first);
//! assert!(!page.last);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    Field, FieldErrors, LoginCredentials, Page, PageRequest, Session, SignupRequest, User,
    UserUpdate, DEFAULT_PAGE_SIZE,
};
