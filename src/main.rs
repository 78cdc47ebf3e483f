//! Fareboard server
//!
//! Flight price dashboard for Australian routes with AI generated insights

use anyhow::{Context, Result};
use fareboard::{config::Settings, create_router, handlers::health::get_uptime_seconds};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up RUST_LOG / LOG_FORMAT from .env before the subscriber is built
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();
    get_uptime_seconds();

    let settings = Settings::new().context("Failed to load server settings")?;
    info!("Server settings loaded ({} cities)", settings.dashboard.cities.len());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Create router
    let app = create_router(settings).await?;

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 {} started!", fareboard::version_info());
    info!("📊 Dashboard: http://{}/", addr);
    info!("📈 Trend API: http://{}/api/price-trend?origin=MEL&destination=SYD", addr);
    info!("📝 Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}

/// Initialize logging system
fn init_logging() {
    // Get log level from environment variable, default to info
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // Check if JSON format should be used
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .with_target(false)
                .with_thread_ids(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    info!("Logging system initialized");
}
