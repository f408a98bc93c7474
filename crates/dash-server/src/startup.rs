//! Service startup: connect, seed, serve.
//!
//! Neither an unreachable store nor an unusable dataset stops the service.
//! Both are logged and the HTTP surface comes up regardless.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use dash_config::{DashConfig, SeedConfig, StoreConfig};
use dash_db::{DashDb, RecordStore, SeedOutcome};
use tokio::net::TcpListener;

use crate::app::build_router;
use crate::error::ServerError;
use crate::state::AppState;

/// Open the record store, or log the failure and return `None`.
pub async fn connect_store(config: &StoreConfig) -> Option<Arc<dyn RecordStore>> {
    match DashDb::open(config).await {
        Ok(db) => {
            tracing::info!(collection = %db.collection(), "connected to record store");
            Some(Arc::new(db))
        }
        Err(error) => {
            tracing::error!(%error, url = %config.url, "failed to connect to record store; API will report server errors until it can be opened");
            None
        }
    }
}

/// Seed the store per `config`, logging instead of failing.
///
/// Returns `None` when there is no store or seeding failed.
pub async fn seed_logged(store: Option<&dyn RecordStore>, config: &SeedConfig) -> Option<SeedOutcome> {
    let Some(store) = store else {
        tracing::warn!("no record store connected; skipping seed");
        return None;
    };
    match dash_db::seed(store, Path::new(&config.dataset_path), config.mode).await {
        Ok(outcome) => {
            tracing::info!(%outcome, mode = %config.mode, "seed finished");
            Some(outcome)
        }
        Err(error) => {
            tracing::error!(%error, "error storing data; collection left unchanged");
            None
        }
    }
}

/// Connect, seed, and serve until `shutdown` resolves.
///
/// # Errors
///
/// Returns `ServerError` only if the listener cannot be bound or the server
/// loop fails. Store and seed failures are logged and tolerated.
pub async fn run<F>(config: &DashConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = connect_store(&config.store).await;
    seed_logged(store.as_deref(), &config.seed).await;

    if store.is_none() {
        tracing::warn!("serving in degraded mode; the store is reopened on the next request");
    }
    let state = AppState::new(store, &config.server).with_reconnect(config.store.clone());
    let app = build_router(state);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, "server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Resolve on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("shutdown signal received");
}
