//! Application layer: services that drive the ports.

/// Application services.
pub mod services;

pub use services::{
    ApiGateway, CommandDispatcher, LiveStateStream, NotificationService, ResourceLoader,
};
