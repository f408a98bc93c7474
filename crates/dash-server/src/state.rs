//! Shared handler state.

use std::path::PathBuf;
use std::sync::Arc;

use dash_config::{ServerConfig, StoreConfig};
use dash_db::RecordStore;
use tokio::sync::RwLock;

use crate::startup::connect_store;

/// State cloned into every handler.
///
/// The store slot is empty when the service came up without a reachable
/// store. With a reconnect config attached, each request that finds the slot
/// empty makes one open attempt, so a reload succeeds once the store is back.
/// Without one the API keeps answering with a server error.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Option<Arc<dyn RecordStore>>>>,
    reconnect: Option<Arc<StoreConfig>>,
    pub static_dir: PathBuf,
    pub index_path: PathBuf,
    pub cors_permissive: bool,
}

impl AppState {
    #[must_use]
    pub fn new(store: Option<Arc<dyn RecordStore>>, server: &ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            reconnect: None,
            static_dir: PathBuf::from(&server.static_dir),
            index_path: server.index_path(),
            cors_permissive: server.cors_permissive,
        }
    }

    /// Open the store from `config` on demand while the slot is empty.
    #[must_use]
    pub fn with_reconnect(mut self, config: StoreConfig) -> Self {
        self.reconnect = Some(Arc::new(config));
        self
    }

    /// The connected store, opening it first if it is missing and a
    /// reconnect config is attached.
    pub async fn store(&self) -> Option<Arc<dyn RecordStore>> {
        if let Some(store) = self.store.read().await.as_ref() {
            return Some(Arc::clone(store));
        }
        let config = self.reconnect.as_deref()?;

        let mut slot = self.store.write().await;
        // Another request may have connected while we waited for the lock.
        if let Some(store) = slot.as_ref() {
            return Some(Arc::clone(store));
        }
        let store = connect_store(config).await?;
        *slot = Some(Arc::clone(&store));
        Some(store)
    }
}
