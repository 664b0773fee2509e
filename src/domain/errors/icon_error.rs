use thiserror::Error;

/// Why an application icon could not be shown.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IconError {
    #[error("icon fetch failed: {message}")]
    Fetch { message: String },

    #[error("icon fetch returned status {status}")]
    Status { status: u16 },

    #[error("icon is not a decodable image: {message}")]
    Decode { message: String },
}

impl IconError {
    #[must_use]
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
