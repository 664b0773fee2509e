//! Application configuration.

use directories::ProjectDirs;
use std::path::PathBuf;

use super::args::CliArgs;

const APP_NAME: &str = "bravia-remote";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "bravia";

/// Remote server used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
const API_PREFIX: &str = "/api";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Runtime configuration, built from defaults and CLI/environment values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote server URL without the `/api` suffix.
    pub server_url: String,
    /// Log file path; the platform data directory is used when unset.
    pub log_path: Option<PathBuf>,
    pub log_level: LogLevel,
    /// Load the application list shortly after startup.
    pub autoload_apps: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            log_path: None,
            log_level: LogLevel::default(),
            autoload_apps: true,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from parsed arguments.
    #[must_use]
    pub fn from_args(args: CliArgs) -> Self {
        let mut config = Self::default();
        config.merge_with_args(args);
        config
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(url) = args.url.filter(|u| !u.trim().is_empty()) {
            self.server_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if args.no_autoload {
            self.autoload_apps = false;
        }
    }

    /// Root of every API route.
    #[must_use]
    pub fn api_base(&self) -> String {
        format!("{}{API_PREFIX}", self.server_url.trim_end_matches('/'))
    }

    /// Log file in use: the configured one or the default one.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_local_dir().join(format!("{APP_NAME}.log")))
    }
}
