//! Live television state carried by push frames.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::errors::StreamError;

const HANDSHAKE_TYPE: &str = "connected";

/// Power state reported by the television.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerStatus {
    Active,
    Standby,
    /// Anything else, including the server's `"unknown"` placeholder.
    #[default]
    #[serde(other)]
    Unknown,
}

impl PowerStatus {
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Snapshot of power, mute and volume.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
    #[serde(default)]
    pub power_status: PowerStatus,
    #[serde(default)]
    pub muted: bool,
    #[serde(default, deserialize_with = "crate::domain::serde_utils::lenient_volume")]
    pub volume: i64,
}

/// Decoded push frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushFrame {
    /// Connection acknowledgement, no state.
    Handshake,
    State(DeviceState),
}

impl PushFrame {
    /// Parses the text of one frame.
    ///
    /// # Errors
    /// Returns `StreamError::Parse` when the frame is not a JSON object or its
    /// fields have the wrong types.
    pub fn parse(text: &str) -> Result<Self, StreamError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| StreamError::parse(e.to_string()))?;

        if !value.is_object() {
            return Err(StreamError::parse("frame is not a JSON object"));
        }

        if value.get("type").and_then(Value::as_str) == Some(HANDSHAKE_TYPE) {
            return Ok(Self::Handshake);
        }

        serde_json::from_value(value)
            .map(Self::State)
            .map_err(|e| StreamError::parse(e.to_string()))
    }
}
