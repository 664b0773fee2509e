//! UI screens.

mod app;
mod notification_popup;

pub use app::App;
pub use notification_popup::NotificationPopup;
