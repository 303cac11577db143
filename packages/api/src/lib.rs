//! # API crate: talking to the Whisper account service
//!
//! Everything the frontends need to create an account on the remote backend.
//! The backend itself lives elsewhere; this crate only knows its wire contract.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`RegistrationApi`] seam and the `reqwest`-based [`RegistrationClient`] |
//! | [`config`] | Resolves [`store::ClientConfig`] from `whisper.toml` and the environment |
//! | [`error`] | [`RegisterError`], including the user-facing description fallback |
//! | [`models`] | Request body, opaque session payload and error envelope |
//!
//! ## Wire contract
//!
//! - `POST <registration_url>` with `Content-Type: application/json` and
//!   `{"name", "email", "password"}`.
//! - Any 2xx answer with a JSON body is a success; the body is the session payload.
//! - Anything else is a failure; `{"message": "..."}` in the body, when present,
//!   is what the user gets to read.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{RegistrationApi, RegistrationClient};
pub use config::{load_client_config, ConfigError};
pub use error::{RegisterError, FALLBACK_DESCRIPTION};
pub use models::{RegisterRequest, SessionPayload};
