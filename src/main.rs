use anyhow::{Context, Result};
use clima_cep::config::LoggingConfig;
use clima_cep::{AppState, ClimaCepConfig, web};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClimaCepConfig::load().with_context(|| "Failed to load configuration")?;

    init_tracing(&config.logging);
    info!("Configuration loaded");

    let state = AppState::from_config(&config)?;
    info!("Upstream clients initialized");

    web::run(&config, state).await
}
