//! Application entry point.
//!
//! Parses command line arguments, loads configuration from TOML, resolves the
//! listen port (flag > environment > file), initializes tracing, builds the
//! router, and starts the HTTP server. Any startup error propagates out of
//! `main` for a non-zero exit with a diagnostic; graceful shutdown exits 0.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use welcome_service::config::{
    self, AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, PORT_ENV_VAR,
};
use welcome_service::http::start_server;
use welcome_service::routes::create_router;

/// A single-endpoint greeting service for exercising deployment pipelines
#[derive(Parser, Debug)]
#[command(name = "welcome-service", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// HTTP listen port (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "welcome_service=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration and resolve the effective port
    let mut config = AppConfig::load_or_default(&args.config)?;
    config.http.port = config::resolve_port(
        args.port,
        std::env::var(PORT_ENV_VAR).ok().as_deref(),
        config.http.port,
    )?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    // Create router and serve until shutdown
    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}

/// Initialize the tracing subscriber with the given filter and output format.
fn init_tracing(filter: &str, format: &str) {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter));

    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
