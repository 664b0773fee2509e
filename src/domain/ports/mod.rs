mod control_port;
mod http_port;
mod icon_port;
mod notification_port;
mod push_port;

pub use control_port::ControlHandle;
pub use http_port::{HttpMethod, HttpPort, HttpRequest, HttpResponse};
pub use icon_port::{IconDimensions, IconPort};
pub use notification_port::NotificationPort;
pub use push_port::{PushChannel, PushConnector};

#[cfg(test)]
pub mod mocks {
    pub use super::http_port::mock::MockHttpPort;
    pub use super::notification_port::mock::MockNotificationPort;
    pub use super::push_port::mock::{ChannelStep, MockPushConnector};
}
