//! # EisenTask API Server
//!
//! HTTP server for an Eisenhower-matrix task manager. Exposes per-user
//! task CRUD, an archived view, and a keyword-based suggestion endpoint,
//! backed by one JSON file per user identity.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p eisentask-api
//! ```

use eisentask_api::{
    app::{build_router, AppState},
    config::Config,
};
use eisentask_shared::clock::SystemClock;
use eisentask_shared::store::task_store::{StoreConfig, TaskStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eisentask_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "EisenTask API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration
    let config = Config::from_env()?;

    // Open the task store (creates the data directory if missing)
    let store = TaskStore::open(
        StoreConfig {
            data_dir: config.storage.data_dir.clone(),
            utc_offset: config.utc_offset(),
        },
        Arc::new(SystemClock),
    )
    .await?;

    // Build Axum application
    let addr = config.bind_address();
    let state = AppState::new(store, config);
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

/// Resolves when Ctrl-C is received
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
