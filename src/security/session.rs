use crate::core::error::StoreError;
use crate::models::user::Session;
use crate::stores::local_store::{LocalStore, ROLE_ID_KEY, SESSION_KEY};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// Owns the current operator session and the access role configuration.
///
/// Handlers reach the session only through this context; `begin` and `end`
/// are the sole ways in and out, and both are mirrored to the store.
pub struct SessionContext {
    current: RwLock<Option<Session>>,
    store: Arc<LocalStore>,
}

impl SessionContext {
    /// Pick up a session left in the store by a previous run.
    /// An unreadable record is discarded.
    pub fn restore(store: Arc<LocalStore>) -> Result<Self, StoreError> {
        let current = match store.get_json::<Session>(SESSION_KEY) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Failed to parse stored session, discarding it");
                store.remove(SESSION_KEY)?;
                None
            }
        };

        if let Some(session) = &current {
            info!(username = %session.username, rank = ?session.rank_id, "Session restored");
        }

        Ok(Self {
            current: RwLock::new(current),
            store,
        })
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Replace any existing session with `session`
    pub fn begin(&self, session: Session) -> Result<(), StoreError> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.store.set_json(SESSION_KEY, &session)?;
        *current = Some(session);
        Ok(())
    }

    /// Drop the session. Returns the one that was active, if any.
    pub fn end(&self) -> Result<Option<Session>, StoreError> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.store.remove(SESSION_KEY)?;
        Ok(current.take())
    }

    pub fn has_role(&self, role_id: &str) -> bool {
        self.current().is_some_and(|s| s.has_role(role_id))
    }

    pub fn has_minimum_rank(&self, rank_id: &str) -> bool {
        self.current().is_some_and(|s| s.has_minimum_rank(rank_id))
    }

    /// Discord role id a session must carry to get through the gate
    pub fn required_role(&self) -> Option<String> {
        self.store
            .get(ROLE_ID_KEY)
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty())
    }

    /// Store the trimmed role id; a blank value clears it
    pub fn set_required_role(&self, role_id: &str) -> Result<Option<String>, StoreError> {
        let role_id = role_id.trim();
        if role_id.is_empty() {
            self.store.remove(ROLE_ID_KEY)?;
            warn!("Required role cleared, login is disabled until a role is configured");
            return Ok(None);
        }

        self.store.set(ROLE_ID_KEY, role_id)?;
        info!(role_id, "Required role updated");
        Ok(Some(role_id.to_string()))
    }
}
