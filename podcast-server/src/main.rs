//! Podcast Server - mock podcast automation API for workflow testing

use anyhow::Result;
use clap::Parser;
use podcast_server::{config::Config, routes, shutdown::shutdown_signal, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcast_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    // Create application state
    let state = AppState::from_config(&config)?;

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Starting server on {}", addr);
    tracing::info!(
        "Download links point at {} (release date {})",
        config.public_url,
        config.release_date
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
