//! Hoaxify Session
//!
//! Process-wide authenticated-session store.
//!
//! The [`SessionStore`] owns the current [`Session`](hoax_core::Session),
//! mirrors it into durable key-value storage, and keeps the HTTP client's
//! shared [`AuthHeader`](hoax_client::AuthHeader) in step with it:
//!
//! - `login` / `rehydrate` set `Authorization: Basic base64(username:password)`
//! - `logout` clears the header and the stored record
//! - `update_user` merges profile changes and re-persists
//!
//! # Example
//!
//! ```ignore
//! use hoax_client::{AuthHeader, ClientConfig, HoaxClient};
//! use hoax_session::{FileStorage, SessionStore};
//! use std::sync::Arc;
//!
//! let auth = AuthHeader::new();
//! let client = HoaxClient::with_auth(ClientConfig::new("http://localhost:8080"), auth.clone())?;
//! let store = SessionStore::new(Arc::new(FileStorage::new("./.hoax")), auth);
//!
//! // Restore a previous login before any request goes out
//! let session = store.rehydrate().await?;
//! ```

mod error;
mod storage;
mod store;

pub use error::{Result, SessionError};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{SessionStore, STORAGE_KEY};
