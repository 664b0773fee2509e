use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bravia-remote",
    version,
    about = "Terminal remote control for Sony Bravia televisions",
    long_about = None
)]
pub struct CliArgs {
    /// Remote server URL (without the `/api` suffix).
    #[arg(short, long, value_name = "URL", env = "BRAVIA_REMOTE_URL")]
    pub url: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH", env = "BRAVIA_REMOTE_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "BRAVIA_REMOTE_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Do not load the application list on startup.
    #[arg(long)]
    pub no_autoload: bool,
}
