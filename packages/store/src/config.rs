//! # Client configuration (`whisper.toml`)
//!
//! Defines the TOML file that tunes the registration client. Every field has a
//! default, so a missing or empty file is equivalent to the default
//! configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! registration_url = "https://wishperbackend.onrender.com/api/user"
//! timeout_secs = 0          # 0 leaves the transport default in place
//!
//! [session]
//! key = "userInformation"
//!
//! [signup]
//! redirect = "/chats"
//! notice_duration_ms = 5000
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Where and how the account-creation request is sent. |
//! | [`SessionConfig`] | Storage key for the returned session payload. |
//! | [`SignupConfig`] | Post-registration route and how long notices stay on screen. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_SESSION_KEY;

/// Default account-creation endpoint.
pub const DEFAULT_REGISTRATION_URL: &str = "https://wishperbackend.onrender.com/api/user";

/// Top-level configuration stored in `whisper.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub signup: SignupConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_registration_url")]
    pub registration_url: String,
    /// Request timeout in seconds. 0 disables the client-side timeout.
    #[serde(default)]
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_key")]
    pub key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupConfig {
    /// Route the user lands on after a successful registration.
    #[serde(default = "default_redirect")]
    pub redirect: String,
    #[serde(default = "default_notice_duration")]
    pub notice_duration_ms: u64,
}

fn default_registration_url() -> String {
    DEFAULT_REGISTRATION_URL.to_string()
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_redirect() -> String {
    "/chats".to_string()
}

fn default_notice_duration() -> u64 {
    5000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            registration_url: default_registration_url(),
            timeout_secs: 0,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: default_session_key(),
        }
    }
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            redirect: default_redirect(),
            notice_duration_ms: default_notice_duration(),
        }
    }
}

impl SignupConfig {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

impl ClientConfig {
    /// Create a config pointing at the given registration endpoint.
    pub fn new(registration_url: String) -> Self {
        Self {
            api: ApiConfig {
                registration_url,
                ..ApiConfig::default()
            },
            ..Self::default()
        }
    }

    /// Builder method to set the post-registration route.
    pub fn with_redirect(mut self, route: impl Into<String>) -> Self {
        self.signup.redirect = route.into();
        self
    }

    /// Builder method to set the session storage key.
    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session.key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "whisper.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
