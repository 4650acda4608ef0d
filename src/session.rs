use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ClientError;
use crate::types::StoredSession;

pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "role";

/// Persistent string key-value storage (browser `localStorage` or a test double).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
    /// Removes every key, not only the session ones.
    fn clear(&self) -> Result<(), ClientError>;
}

#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

#[derive(Clone)]
pub struct SessionManager<S> {
    store: S,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Both values are written as given; the role is not checked here.
    pub fn save_session(&self, username: &str, role: &str) -> Result<(), ClientError> {
        self.store.set(USERNAME_KEY, username)?;
        self.store.set(ROLE_KEY, role)?;
        tracing::info!(username, role, "session saved");
        Ok(())
    }

    pub fn get_session(&self) -> StoredSession {
        StoredSession {
            username: self.store.get(USERNAME_KEY),
            role: self.store.get(ROLE_KEY),
        }
    }

    pub fn clear_session(&self) -> Result<(), ClientError> {
        self.store.clear()?;
        tracing::info!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_get_session() {
        let sessions = SessionManager::new(MemoryStore::new());
        sessions.save_session("alice", "user").unwrap();

        let session = sessions.get_session();
        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(session.role.as_deref(), Some("user"));
    }

    #[test]
    fn test_unknown_role_is_stored_verbatim() {
        let sessions = SessionManager::new(MemoryStore::new());
        sessions.save_session("mod", "moderator").unwrap();

        assert_eq!(sessions.get_session().role.as_deref(), Some("moderator"));
    }

    #[test]
    fn test_absent_session_is_empty_not_error() {
        let sessions = SessionManager::new(MemoryStore::new());
        assert_eq!(sessions.get_session(), StoredSession::default());
    }

    #[test]
    fn test_clear_wipes_all_keys() {
        let store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        let sessions = SessionManager::new(store.clone());
        sessions.save_session("root", "admin").unwrap();
        assert_eq!(store.len(), 3);

        sessions.clear_session().unwrap();
        assert!(store.is_empty());
        assert_eq!(sessions.get_session(), StoredSession::default());
    }
}
