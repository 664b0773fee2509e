//! Push channel error types.

use thiserror::Error;

pub type StreamResult<T> = Result<T, StreamError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StreamError {
    #[error("failed to open push channel: {message}")]
    Connect { message: String },

    #[error("push channel error: {message}")]
    Channel { message: String },

    #[error("push channel closed by server")]
    Closed,

    #[error("malformed push frame: {message}")]
    Parse { message: String },
}

impl StreamError {
    #[must_use]
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn channel(message: impl Into<String>) -> Self {
        Self::Channel {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Frame-level errors leave the channel usable; everything else tears it
    /// down.
    #[must_use]
    pub const fn is_frame_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
