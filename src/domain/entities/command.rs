//! Remote command tokens and direct device actions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque IRCC token for one remote-control key press.
///
/// The client never looks inside the token; the television decides whether it
/// is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteCommand(String);

impl RemoteCommand {
    /// Creates a command from a non-blank token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Returns the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StaticCommand> for RemoteCommand {
    fn from(command: StaticCommand) -> Self {
        Self(command.0.to_string())
    }
}

/// Command token usable in `const` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticCommand(&'static str);

impl StaticCommand {
    #[must_use]
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    #[must_use]
    pub fn to_command(self) -> RemoteCommand {
        self.into()
    }
}

/// Device operations the remote server exposes as their own routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceAction {
    PowerOn,
    PowerOff,
    VolumeUp,
    VolumeDown,
}

impl DeviceAction {
    /// Route relative to the API base.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::PowerOn => "/power/on",
            Self::PowerOff => "/power/off",
            Self::VolumeUp => "/volume/up",
            Self::VolumeDown => "/volume/down",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PowerOn => "power on",
            Self::PowerOff => "power off",
            Self::VolumeUp => "volume up",
            Self::VolumeDown => "volume down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_rejected() {
        assert!(RemoteCommand::new("").is_none());
        assert!(RemoteCommand::new("   ").is_none());
    }

    #[test]
    fn test_token_is_kept_verbatim() {
        let command = RemoteCommand::new(" AAAAAQAAAAEAAAB0Aw== ").unwrap();
        assert_eq!(command.as_str(), "AAAAAQAAAAEAAAB0Aw==");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let command = StaticCommand::new("AAAAAQAAAAEAAABlAw==").to_command();
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, "\"AAAAAQAAAAEAAABlAw==\"");
    }
}
