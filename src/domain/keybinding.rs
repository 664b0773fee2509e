//! Keyboard routing.
//!
//! Remote keys (arrows, enter, space) are forwarded to the television unless a
//! text field has focus. Everything else drives the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::entities::{RemoteCommand, StaticCommand};

pub const KEY_UP: StaticCommand = StaticCommand::new("AAAAAQAAAAEAAAB0Aw==");
pub const KEY_DOWN: StaticCommand = StaticCommand::new("AAAAAQAAAAEAAAB1Aw==");
pub const KEY_LEFT: StaticCommand = StaticCommand::new("AAAAAQAAAAEAAAA0Aw==");
pub const KEY_RIGHT: StaticCommand = StaticCommand::new("AAAAAQAAAAEAAAAzAw==");
pub const KEY_CONFIRM: StaticCommand = StaticCommand::new("AAAAAQAAAAEAAABlAw==");
pub const KEY_PLAY_PAUSE: StaticCommand = StaticCommand::new("AAAAAgAAAJcAAAAaAw==");

/// What currently owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusContext {
    /// Any control; remote keys are live.
    #[default]
    Controls,
    /// A text field; every key belongs to the field.
    TextInput,
}

/// Maps a key press to the remote command it stands for, if any.
#[must_use]
pub fn command_for(key: &KeyEvent, focus: FocusContext) -> Option<RemoteCommand> {
    if focus == FocusContext::TextInput || !is_press(key) {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let command = match key.code {
        KeyCode::Up => KEY_UP,
        KeyCode::Down => KEY_DOWN,
        KeyCode::Left => KEY_LEFT,
        KeyCode::Right => KEY_RIGHT,
        KeyCode::Enter => KEY_CONFIRM,
        KeyCode::Char(' ') => KEY_PLAY_PAUSE,
        _ => return None,
    };

    Some(command.to_command())
}

/// Terminal UI actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrevious,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Activate,
    ReloadApps,
    LoadInputs,
    OpenPrompt,
    VolumeUp,
    VolumeDown,
    PowerOn,
    PowerOff,
}

impl Action {
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if !is_press(key) {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Self::Quit),
                _ => None,
            };
        }

        let action = match key.code {
            KeyCode::Char('q') => Self::Quit,
            KeyCode::Tab => Self::FocusNext,
            KeyCode::BackTab => Self::FocusPrevious,
            KeyCode::Char('k') => Self::MoveUp,
            KeyCode::Char('j') => Self::MoveDown,
            KeyCode::Char('h') => Self::MoveLeft,
            KeyCode::Char('l') => Self::MoveRight,
            KeyCode::Char('o') => Self::Activate,
            KeyCode::Char('r') => Self::ReloadApps,
            KeyCode::Char('i') => Self::LoadInputs,
            KeyCode::Char(':') => Self::OpenPrompt,
            KeyCode::Char('+' | '=') => Self::VolumeUp,
            KeyCode::Char('-') => Self::VolumeDown,
            KeyCode::Char('W') => Self::PowerOn,
            KeyCode::Char('S') => Self::PowerOff,
            _ => return None,
        };

        Some(action)
    }
}

fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Help line entries: key, description.
pub const HELP: &[(&str, &str)] = &[
    ("←↑→↓ ⏎ ␣", "remote"),
    ("tab", "panel"),
    ("hjkl", "move"),
    ("o", "press"),
    ("r", "apps"),
    ("i", "inputs"),
    ("+/-", "volume"),
    ("W/S", "power"),
    (":", "token"),
    ("q", "quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test_case(KeyCode::Up, "AAAAAQAAAAEAAAB0Aw==" ; "up")]
    #[test_case(KeyCode::Down, "AAAAAQAAAAEAAAB1Aw==" ; "down")]
    #[test_case(KeyCode::Left, "AAAAAQAAAAEAAAA0Aw==" ; "left")]
    #[test_case(KeyCode::Right, "AAAAAQAAAAEAAAAzAw==" ; "right")]
    #[test_case(KeyCode::Enter, "AAAAAQAAAAEAAABlAw==" ; "enter")]
    #[test_case(KeyCode::Char(' '), "AAAAAgAAAJcAAAAaAw==" ; "space")]
    fn test_remote_keys(code: KeyCode, token: &str) {
        let command = command_for(&press(code), FocusContext::Controls).unwrap();
        assert_eq!(command.as_str(), token);
    }

    #[test_case(KeyCode::Up ; "up")]
    #[test_case(KeyCode::Enter ; "enter")]
    #[test_case(KeyCode::Char(' ') ; "space")]
    fn test_text_focus_swallows_remote_keys(code: KeyCode) {
        assert_eq!(command_for(&press(code), FocusContext::TextInput), None);
    }

    #[test]
    fn test_other_keys_are_not_commands() {
        assert_eq!(
            command_for(&press(KeyCode::Char('a')), FocusContext::Controls),
            None
        );
        assert_eq!(command_for(&press(KeyCode::Tab), FocusContext::Controls), None);
    }

    #[test]
    fn test_modified_arrow_is_not_a_command() {
        let key = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(command_for(&key, FocusContext::Controls), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let key = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(command_for(&key, FocusContext::Controls), None);
        assert_eq!(Action::from_key(&key), None);
    }

    #[test_case(KeyCode::Char('q'), Some(Action::Quit) ; "quit")]
    #[test_case(KeyCode::Tab, Some(Action::FocusNext) ; "tab")]
    #[test_case(KeyCode::Char('o'), Some(Action::Activate) ; "activate")]
    #[test_case(KeyCode::Char('+'), Some(Action::VolumeUp) ; "volume_up")]
    #[test_case(KeyCode::Up, None ; "arrows_are_remote_keys")]
    fn test_actions(code: KeyCode, expected: Option<Action>) {
        assert_eq!(Action::from_key(&press(code)), expected);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        assert_eq!(Action::from_key(&key), Some(Action::Quit));
    }
}
