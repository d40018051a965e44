//! Hoaxify CLI Library
//!
//! Terminal front end for the Hoaxify user directory: configuration,
//! command handlers and plain-text rendering of controller state.
//!
//! This library exposes the components used by the `hoax` binary for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod render;

pub use app::{App, SignupInput};
pub use config::AppConfig;
pub use error::{CliError, Result};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str =
    "hoax_cli=info,hoax_client=info,hoax_session=info,hoax_controllers=info";
