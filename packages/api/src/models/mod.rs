//! Wire types exchanged with the account-creation endpoint.

pub mod registration;

pub use registration::{ErrorBody, RegisterRequest, SessionPayload};
