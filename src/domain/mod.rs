//! Domain layer with core entities and port definitions.

/// Push channel lifecycle.
pub mod connection;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keyboard routing.
pub mod keybinding;
/// Notification definitions.
pub mod notification;
/// Port definitions.
pub mod ports;
/// On-screen remote layout.
pub mod remote_pad;
/// Serde utilities.
pub mod serde_utils;

pub use connection::ConnectionState;
pub use entities::{AppEntry, DeviceState, InputEntry, RemoteCommand};
pub use errors::{RequestError, StreamError};
pub use notification::{Notification, NotificationKind};
pub use ports::{HttpPort, NotificationPort, PushConnector};
