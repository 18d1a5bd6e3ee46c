// API Server Binary Entry Point
//
// Purpose: Start the Axum API server for nutrition risk assessment
// Usage: cargo run --features api --bin api_server

use nutrition_advisor::{create_router, AppState, AssessorConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "nutrition_advisor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config = AssessorConfig::from_env()?;

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    tracing::info!("Configuration:");
    tracing::info!("  JITTER: {}", config.jitter);
    tracing::info!("  SEED: {:?}", config.seed);
    tracing::info!("  REFERENCE_TABLES: {:?}", config.tables_path);
    tracing::info!("  PORT: {}", port);

    let state = AppState::new(&config)?;

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
