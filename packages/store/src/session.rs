//! # Session storage
//!
//! The registration flow persists the payload returned by the account endpoint
//! under a single well-known key. Everything that can hold that payload
//! implements [`SessionStore`]:
//!
//! | Store | Platform | Backing |
//! |-------|----------|---------|
//! | [`crate::MemoryStore`] | any | `HashMap` behind a mutex, used in tests |
//! | [`crate::FileStore`] | desktop | one file per key under a data directory |
//! | `LocalStore` | web (`web` feature) | the browser's `localStorage` |
//!
//! Writes replace the previous value wholesale. There is no merge and no
//! history: the last successful registration wins.

use std::future::Future;

use thiserror::Error;

/// Key under which the registration payload is stored unless configured otherwise.
pub const DEFAULT_SESSION_KEY: &str = "userInformation";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Async key-value storage for the session payload.
pub trait SessionStore {
    fn get(&self, key: &str) -> impl Future<Output = Option<String>>;
    fn put(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>>;
}
