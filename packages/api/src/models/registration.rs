//! # Registration wire types
//!
//! ## [`RegisterRequest`]
//!
//! The JSON body POSTed to the registration endpoint: `name`, `email` and
//! `password`, exactly as typed. The confirmation field of the form never
//! leaves the client, so it has no place here.
//!
//! ## [`SessionPayload`]
//!
//! Whatever JSON the endpoint answers with on success. The client only checks
//! that the body is well-formed JSON. The body text is kept as received and
//! stored byte for byte; the parsed value is only peeked at for display
//! purposes ([`SessionPayload::display_name`]).
//!
//! ## [`ErrorBody`]
//!
//! The error envelope the endpoint uses for rejections: `{"message": "..."}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RegisterError;

/// Body of the account-creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Opaque session data returned by a successful registration.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPayload {
    raw: String,
    value: Value,
}

impl SessionPayload {
    pub fn new(value: Value) -> Self {
        Self {
            raw: value.to_string(),
            value,
        }
    }

    /// Decode a response body. Any well-formed JSON document is accepted.
    pub fn from_json(body: &str) -> Result<Self, RegisterError> {
        let value = serde_json::from_str(body).map_err(|e| RegisterError::Malformed(e.to_string()))?;
        Ok(Self {
            raw: body.to_string(),
            value,
        })
    }

    /// The body exactly as received. This is what goes into the session store.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Name to greet the user with, falling back to their email address.
    pub fn display_name(&self) -> Option<&str> {
        let non_empty = |field: &str| {
            self.value
                .get(field)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };
        non_empty("name").or_else(|| non_empty("email"))
    }
}

/// Error envelope sent by the endpoint on rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract a non-empty `message` from a raw error body, if there is one.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
    }
}
