//! Application configuration.

pub mod app_config;
pub mod args;

pub use app_config::{AppConfig, DEFAULT_SERVER_URL, LogLevel};
pub use args::CliArgs;
