pub mod api_gateway;
pub mod command_dispatcher;
pub mod live_state;
pub mod notification_service;
pub mod resource_kinds;
pub mod resource_loader;

pub use api_gateway::{ApiGateway, RequestOptions};
pub use command_dispatcher::{ActionOutcome, CommandDispatcher};
pub use live_state::{LiveStateConfig, LiveStateEvent, LiveStateHandle, LiveStateStream, LiveStatus};
pub use notification_service::NotificationService;
pub use resource_kinds::{AppVisual, Apps, InputVisual, Inputs, ResourceKind};
pub use resource_loader::{ListView, LoadOutcome, ResourceControl, ResourceLoader};
