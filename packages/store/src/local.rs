//! # Browser `localStorage` session store
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. It writes
//! straight into `window.localStorage`, so the payload is visible to the rest of
//! the application (and to any page on the same origin) under the configured key.
//!
//! The storage handle is looked up on every call. Browsers may refuse access
//! (private mode, disabled storage), which surfaces as [`StoreError::Unavailable`].

use crate::session::{SessionStore, StoreError};

/// `localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl SessionStore for LocalStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
