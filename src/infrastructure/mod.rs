//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Bravia remote server adapters.
pub mod remote;

pub use config::{AppConfig, CliArgs, LogLevel};
pub use remote::{HttpClient, IconFetcher, SseConnector, build_client};
