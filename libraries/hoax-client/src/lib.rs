//! Hoaxify Client
//!
//! HTTP client library for the Hoaxify REST API.
//!
//! # Features
//!
//! - **Users**: paged user listing, profile lookup, signup, profile update
//! - **Authentication**: Basic-credential login
//! - **Shared auth header**: an [`AuthHeader`] handle that the session store
//!   writes and every request reads
//!
//! # Example
//!
//! ```ignore
//! use hoax_client::{ClientConfig, HoaxClient, UserApi};
//! use hoax_core::{LoginCredentials, PageRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HoaxClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//!     // Log in and authenticate subsequent requests
//!     let credentials = LoginCredentials::new("user1", "P4ssword");
//!     let user = client.login(&credentials).await?;
//!     client.auth().set_basic(&credentials).await;
//!     println!("Logged in as {}", user.display_name);
//!
//!     // First page of users
//!     let page = client.list_users(PageRequest::new(0, 3)?).await?;
//!     println!("Found {} users", page.content.len());
//!
//!     Ok(())
//! }
//! ```

mod api;
mod auth;
mod client;
mod error;
mod types;
mod users;

// Re-export main types
pub use api::UserApi;
pub use auth::{basic_authorization, AuthClient, AuthHeader};
pub use client::HoaxClient;
pub use error::{ClientError, Result};
pub use types::{ApiErrorBody, ClientConfig, GenericResponse, API_PREFIX};
pub use users::UsersClient;
