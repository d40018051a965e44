//! The authenticated-session store.

use crate::error::{Result, SessionError};
use crate::storage::SessionStorage;
use hoax_client::AuthHeader;
use hoax_core::{Session, UserUpdate};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Storage key of the persisted session record.
pub const STORAGE_KEY: &str = "hoax-auth";

/// Owns the current session and keeps storage and the auth header in step.
///
/// The session is mutated only through `login`, `rehydrate`, `logout` and
/// `update_user`. Each of them updates the in-memory record, the stored
/// record and the shared header together.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    auth: AuthHeader,
    current: RwLock<Session>,
}

impl SessionStore {
    /// Create an anonymous store writing to `storage` and `auth`.
    pub fn new(storage: Arc<dyn SessionStorage>, auth: AuthHeader) -> Self {
        Self {
            storage,
            auth,
            current: RwLock::new(Session::anonymous()),
        }
    }

    /// Restore a persisted login.
    ///
    /// Only a record with `isLoggedIn` set is restored. An unreadable record
    /// is ignored and the store stays anonymous.
    pub async fn rehydrate(&self) -> Result<Session> {
        let Some(json) = self.storage.get_item(STORAGE_KEY).await? else {
            debug!("No stored session");
            return Ok(Session::anonymous());
        };

        let stored = match Session::from_json(&json) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable stored session");
                return Ok(Session::anonymous());
            }
        };

        if !stored.is_logged_in {
            debug!("Stored session is not logged in");
            return Ok(Session::anonymous());
        }

        self.auth.set_basic(&stored.credentials()).await;
        *self.current.write().await = stored.clone();

        info!(username = %stored.username, "Session restored");
        Ok(stored)
    }

    /// Make `session` current, persist it and authenticate requests with it.
    pub async fn login(&self, session: Session) -> Result<()> {
        self.auth.set_basic(&session.credentials()).await;
        *self.current.write().await = session.clone();

        self.persist(&session).await?;
        info!(username = %session.username, "Logged in");
        Ok(())
    }

    /// Forget the session everywhere.
    pub async fn logout(&self) -> Result<()> {
        let previous =
            std::mem::replace(&mut *self.current.write().await, Session::anonymous());
        self.auth.clear().await;
        self.storage.remove_item(STORAGE_KEY).await?;

        info!(username = %previous.username, "Logged out");
        Ok(())
    }

    /// Merge a profile update into the current session and re-persist it.
    pub async fn update_user(&self, update: &UserUpdate) -> Result<Session> {
        let updated = {
            let mut current = self.current.write().await;
            if !current.is_logged_in {
                return Err(SessionError::NotLoggedIn);
            }
            current.apply(update);
            current.clone()
        };

        self.persist(&updated).await?;
        debug!(username = %updated.username, "Session updated");
        Ok(updated)
    }

    /// Snapshot of the current session
    pub async fn current(&self) -> Session {
        self.current.read().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.current.read().await.is_logged_in
    }

    /// The auth header this store writes
    pub fn auth(&self) -> &AuthHeader {
        &self.auth
    }

    async fn persist(&self, session: &Session) -> Result<()> {
        let json = session.to_json()?;
        self.storage.set_item(STORAGE_KEY, &json).await
    }
}
