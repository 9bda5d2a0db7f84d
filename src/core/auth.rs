//! Admin session handling.
//!
//! The session is a single localStorage flag. It only decides whether admin
//! controls are shown; the server enforces the real authorization.

use crate::config::storage::{AUTH_KEY, AUTH_VALUE};
use crate::core::api::FileApi;
use crate::core::error::{LoginFailure, StorageError};
use crate::models::LoginOutcome;
use crate::utils::dom;

/// Key/value backend the session flag lives in.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl SessionStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .ok_or(StorageError::Unavailable)?
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed)
    }
}

/// Client-side admin session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Admin,
}

impl Session {
    /// Read the session from storage. Anything but the exact flag value is anonymous.
    pub fn restore(store: &impl SessionStore) -> Self {
        match store.read(AUTH_KEY) {
            Some(value) if value == AUTH_VALUE => Self::Admin,
            _ => Self::Anonymous,
        }
    }

    /// Persist a fresh admin session.
    pub fn begin(store: &impl SessionStore) -> Result<Self, StorageError> {
        store.write(AUTH_KEY, AUTH_VALUE)?;
        Ok(Self::Admin)
    }

    /// Drop the stored session.
    pub fn end(store: &impl SessionStore) -> Result<Self, StorageError> {
        store.remove(AUTH_KEY)?;
        Ok(Self::Anonymous)
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Submit a password and start a session when the server accepts it.
///
/// Single attempt, no retry. A session that cannot be persisted counts as a
/// failed login since the admin view would bounce straight back. The cause
/// travels with [`LoginOutcome::ConnectionFailed`] for logging.
pub async fn sign_in<A, S>(api: &A, store: &S, password: &str) -> LoginOutcome
where
    A: FileApi,
    S: SessionStore,
{
    match api.login(password).await {
        Ok(response) if response.success => match Session::begin(store) {
            Ok(_) => LoginOutcome::Accepted,
            Err(e) => LoginOutcome::ConnectionFailed(e.into()),
        },
        Ok(_) => LoginOutcome::Rejected,
        Err(e) => LoginOutcome::ConnectionFailed(e.into()),
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// In-memory [`SessionStore`].
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub items: RefCell<HashMap<String, String>>,
        /// Refuse every write, like a full or disabled localStorage.
        pub read_only: bool,
    }

    impl SessionStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::WriteFailed);
            }
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.items.borrow_mut().remove(key);
            Ok(())
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_round_trip() {
        let store = LocalStore;
        let _ = Session::end(&store);
        assert_eq!(Session::restore(&store), Session::Anonymous);

        Session::begin(&store).unwrap();
        assert_eq!(Session::restore(&store), Session::Admin);

        Session::end(&store).unwrap();
        assert_eq!(Session::restore(&store), Session::Anonymous);
    }
}
