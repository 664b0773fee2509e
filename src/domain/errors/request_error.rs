//! Request/response error types.

use thiserror::Error;

/// Message used when a rejection carries no `error` field.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Failure of one API call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum RequestError {
    /// The request never reached the server or no response came back.
    #[error("network error: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The server answered successfully with a body that could not be decoded.
    #[error("invalid response: {message}")]
    Decode { message: String },
}

impl RequestError {
    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates rejection, falling back to the generic message when the server
    /// did not explain itself.
    #[must_use]
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        Self::Rejected { status, message }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Text shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("Error: {self}")
    }
}
