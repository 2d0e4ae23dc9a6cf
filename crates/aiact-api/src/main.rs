//! # aiact-api - Binary Entry Point
//!
//! Starts the Axum HTTP server for the compliance API.
//! Binds to the configured port (default 8000).

use aiact_api::state::{AppConfig, AppState, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Initialize structured tracing.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let metrics = if config.metrics_enabled {
        let handle = aiact_api::middleware::metrics::install_recorder().map_err(|e| {
            tracing::error!("Failed to install Prometheus recorder: {e}");
            e
        })?;
        Some(handle)
    } else {
        tracing::info!("Metrics disabled; /metrics will return 503");
        None
    };

    let port = config.port;
    tracing::info!(
        app_name = %config.app_name,
        synthesis = %config.synthesis,
        "Starting EU AI Act Compliance Bot API"
    );
    let app = aiact_api::app(AppState::with_config(config, metrics));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    tracing::info!("Shutting down EU AI Act Compliance Bot API");
    Ok(())
}
