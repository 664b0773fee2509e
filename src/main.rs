use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use bravia_remote::infrastructure::{
    AppConfig, CliArgs, HttpClient, IconFetcher, SseConnector, build_client,
};
use bravia_remote::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_args(CliArgs::parse());

    init_logging(&config)?;

    let api_base = config.api_base();
    info!(
        version = bravia_remote::VERSION,
        api = %api_base,
        "Starting {}",
        bravia_remote::NAME
    );

    let client = build_client()?;
    let http = Arc::new(HttpClient::from_client(client.clone(), api_base.as_str()));
    let push = Arc::new(SseConnector::new(client.clone(), &api_base));
    let icons = Arc::new(IconFetcher::new(client));

    Ok(App::new(http, push, icons, config.autoload_apps))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
