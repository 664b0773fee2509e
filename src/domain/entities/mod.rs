//! Domain entities.

mod command;
mod control;
mod device_state;
mod resource;

pub use command::{DeviceAction, RemoteCommand, StaticCommand};
pub use control::LoadingFlag;
pub use device_state::{DeviceState, PowerStatus, PushFrame};
pub use resource::{AppEntry, AppIcon, InputCategory, InputEntry, ListResponse};
