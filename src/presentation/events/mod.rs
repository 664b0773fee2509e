//! Event handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::domain::keybinding::{Action, FocusContext, command_for};
use crate::domain::entities::RemoteCommand;

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// What a terminal key press means for the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRoute {
    /// Forward to the television.
    Remote(RemoteCommand),
    /// Drive the terminal UI.
    Ui(Action),
    /// Belongs to the focused text field.
    Text(KeyEvent),
    Ignored,
}

/// Routes terminal events according to what has focus.
pub struct EventHandler;

impl EventHandler {
    /// Routes `event`. Remote keys win over UI bindings; with a text field
    /// focused every press goes to the field.
    #[must_use]
    pub fn route(event: &Event, focus: FocusContext) -> KeyRoute {
        let Event::Key(key) = event else {
            return KeyRoute::Ignored;
        };
        if key.kind == KeyEventKind::Release {
            return KeyRoute::Ignored;
        }
        if focus == FocusContext::TextInput {
            return KeyRoute::Text(*key);
        }
        if let Some(command) = command_for(key, focus) {
            return KeyRoute::Remote(command);
        }
        Action::from_key(key).map_or(KeyRoute::Ignored, KeyRoute::Ui)
    }
}
