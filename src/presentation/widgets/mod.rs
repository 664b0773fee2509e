mod grid_cursor;
mod remote_pad;
mod resource_grid;
mod status_bar;
mod token_prompt;

pub use grid_cursor::{Direction, GridCursor};
pub use remote_pad::{RemotePad, RemotePadState};
pub use resource_grid::{CellView, ResourceGrid};
pub use status_bar::{DeviceStatusView, StatusBar};
pub use token_prompt::{PromptOutcome, TokenPrompt};
