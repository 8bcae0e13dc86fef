use anyhow::Result;
use ict_signal_engine::{config, server};
use tracing::info;

/// Rejects a configured `logs.level` that tracing cannot parse
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Config decides the log level, so it is read before tracing is up
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let env_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => tracing_subscriber::EnvFilter::try_new(&filter)
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG '{}': {}", filter, e)),
        Err(_) => validate_log_level(&config.server.logs.level)
            .map(|_| tracing_subscriber::EnvFilter::new(&config.server.logs.level)),
    };

    let env_filter = match env_filter {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .init();

    info!("Starting ICT signal engine: {}", config.server.summary());

    server::run(config).await?;

    Ok(())
}
