// API Server Binary Entry Point
//
// Usage: cargo run --features api --bin api_server

use farm_query_engine::{create_router, AppState, EngineConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_query_engine=info,tower_http=debug,axum=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data/sample".to_string());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  DATA_DIR: {}", data_dir);
    tracing::info!("  PORT: {}", port);

    let config = EngineConfig::from_env()?;
    let state = AppState::new(&data_dir, config)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
