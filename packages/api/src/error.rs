use thiserror::Error;

use crate::models::ErrorBody;

/// Shown when a failed registration carries no usable message.
pub const FALLBACK_DESCRIPTION: &str = "Something went wrong. Please try again.";

/// Everything that can go wrong between sending the request and decoding the answer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegisterError {
    #[error("could not reach the registration service: {0}")]
    Transport(String),
    #[error("registration rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("registration failed with status {status}")]
    Status { status: u16 },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl RegisterError {
    /// Classify a non-success response by whether its body carries a message.
    pub fn from_response(status: u16, body: &str) -> Self {
        match ErrorBody::message_from(body) {
            Some(message) => Self::Rejected { status, message },
            None => Self::Status { status },
        }
    }

    /// Text suitable for showing to the user.
    pub fn description(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message,
            _ => FALLBACK_DESCRIPTION,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Status { status } => Some(*status),
            Self::Transport(_) | Self::Malformed(_) => None,
        }
    }
}

impl From<reqwest::Error> for RegisterError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Malformed(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}
