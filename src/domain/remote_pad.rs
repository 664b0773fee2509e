//! Static layout of the on-screen remote.

use crate::domain::entities::StaticCommand;
use crate::domain::keybinding::{
    KEY_CONFIRM, KEY_DOWN, KEY_LEFT, KEY_PLAY_PAUSE, KEY_RIGHT, KEY_UP,
};

pub const PAD_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadButton {
    pub label: &'static str,
    pub command: StaticCommand,
}

const fn button(label: &'static str, command: StaticCommand) -> PadButton {
    PadButton { label, command }
}

/// Row-major, `PAD_COLUMNS` per row.
pub const PAD_BUTTONS: &[PadButton] = &[
    button("Power", StaticCommand::new("AAAAAQAAAAEAAAAVAw==")),
    button("Input", StaticCommand::new("AAAAAQAAAAEAAAAlAw==")),
    button("Home", StaticCommand::new("AAAAAQAAAAEAAABgAw==")),
    button("Back", StaticCommand::new("AAAAAgAAAJcAAAAjAw==")),
    button("Vol+", StaticCommand::new("AAAAAQAAAAEAAAASAw==")),
    button("▲", KEY_UP),
    button("Ch+", StaticCommand::new("AAAAAQAAAAEAAAAQAw==")),
    button("Options", StaticCommand::new("AAAAAgAAAJcAAAA2Aw==")),
    button("◀", KEY_LEFT),
    button("OK", KEY_CONFIRM),
    button("▶", KEY_RIGHT),
    button("Mute", StaticCommand::new("AAAAAQAAAAEAAAAUAw==")),
    button("Vol-", StaticCommand::new("AAAAAQAAAAEAAAATAw==")),
    button("▼", KEY_DOWN),
    button("Ch-", StaticCommand::new("AAAAAQAAAAEAAAARAw==")),
    button("⏯", KEY_PLAY_PAUSE),
];
