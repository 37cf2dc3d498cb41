//! Library catalog server.
//!
//! Reads `DBUSER`/`DBPASS` (optionally from `.env`), connects to the `library`
//! database on localhost:3306 and serves the catalog on localhost:8080.
//! Run from repo root: `cargo run -p library-catalog-server`

use library_catalog::{catalog_router, AppState, CatalogConfig, MySqlBookStore};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("library_catalog=info,tower_http=info")
            }),
        )
        .init();

    let config = CatalogConfig::from_env();
    let store = match MySqlBookStore::connect(&config.database).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(
                error = %e,
                database = ?config.database,
                "cannot reach the catalog database"
            );
            return Err(e.into());
        }
    };

    let app = catalog_router(AppState::new(store.clone()));
    let listener = TcpListener::bind(&config.server.listen_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
