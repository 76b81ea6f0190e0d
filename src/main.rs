use anyhow::Result;
use tracing::{info, warn};
use tutor_relay::{config, server};

/// Validates that a log level string is valid
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
    // Configuration comes first so the log level can be taken from it
    let loaded = match config::load().await {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let config = loaded.config;

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    // Directives such as "tutor_relay=debug" are left to EnvFilter
    if !log_level.contains('=') {
        if let Err(e) = validate_log_level(&log_level) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    let filter = match tracing_subscriber::EnvFilter::try_new(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Invalid log filter '{}': {}", log_level, e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting tutor relay with log level: {}", log_level);
    match loaded.source.as_deref() {
        Some(path) => info!("Configuration read from {}", path),
        None => info!("No configuration file found, using defaults"),
    }
    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    info!(
        provider = ?config.llm.provider,
        model = %config.llm.model,
        "Configuration loaded successfully"
    );

    server::run(config).await?;

    Ok(())
}
