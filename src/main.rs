use aicode_client::{
    api::CodeGeneratorClient,
    app::{App, ComponentRegistry, Locale, Router, StateStore},
    config,
    transport::HttpTransport,
};
use anyhow::Result;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::info;

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
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    info!("Starting aicode client with log level: {}", log_level);

    let transport = Arc::new(HttpTransport::new(config.backend.clone())?);
    let client = CodeGeneratorClient::new(transport);

    // Bootstrap faults propagate and terminate startup; there is no
    // recovery path before the app is mounted.
    let locale = Locale::for_code(&config.app.locale)?;
    let app = App::builder()
        .with_store(StateStore::new())
        .with_router(Router::default())
        .with_components(ComponentRegistry::new())
        .with_locale(locale)
        .mount(&config.app.mount_anchor)?;

    info!(
        "Application ready at {} (locale: {})",
        app.anchor(),
        app.locale().code()
    );

    let mut body = String::new();
    tokio::io::stdin().read_to_string(&mut body).await?;

    let output = client.generate_code(body, None).await?;
    println!("{}", output);

    Ok(())
}
