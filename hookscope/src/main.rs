use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hookscope::{
    server::{self, config::Configuration, AppState},
    CaptureLog, CAPACITY,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .init();

    // Load configuration
    let configuration = Configuration::new()?;
    tracing::info!("Configuration loaded successfully");

    if !std::path::Path::new(&configuration.server.static_dir).is_dir() {
        tracing::warn!(
            static_dir = %configuration.server.static_dir,
            "Static directory not found, UI will not be served"
        );
    }

    let capture_log = Arc::new(CaptureLog::new());
    tracing::info!("Capture log initialized with capacity of {} requests", CAPACITY);

    let app = server::router(AppState::new(capture_log), &configuration.server);

    // Start server
    let addr = configuration.server.socket_addr()?;
    let public_url = configuration.server.public_url();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("UI available at {}/ui/", public_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
