//! Shared handle over the document store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use pqphub_core::config::DatabaseConfig;
use pqphub_core::result::AppResult;
use pqphub_entity::Document;

use crate::store::{DocumentStore, JsonFileStore, MemoryStore};

/// Cloneable handle every repository is built from.
///
/// Read-modify-write turns are serialized within this process. Separate
/// processes writing the same file can still lose updates.
#[derive(Debug, Clone)]
pub struct Database {
    store: Arc<dyn DocumentStore>,
    write_turn: Arc<Mutex<()>>,
}

impl Database {
    /// Wrap an arbitrary store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_turn: Arc::new(Mutex::new(())),
        }
    }

    /// Open the JSON file store described by configuration.
    pub fn open(config: &DatabaseConfig) -> Self {
        debug!(path = %config.path, "Opening JSON document store");
        Self::new(Arc::new(JsonFileStore::new(&config.path)))
    }

    /// Create a database backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Load the document and project something out of it.
    pub async fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> AppResult<R> {
        let document = self.store.load().await?;
        Ok(f(&document))
    }

    /// Run one read-modify-write turn.
    ///
    /// The closure returns `Some` to persist its changes or `None` to leave
    /// the stored document untouched.
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut Document) -> Option<R>) -> AppResult<Option<R>> {
        let _turn = self.write_turn.lock().await;
        let mut document = self.store.load().await?;
        match f(&mut document) {
            Some(result) => {
                self.store.save(&document).await?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    /// Run one read-modify-write turn that always persists.
    pub async fn commit<R>(&self, f: impl FnOnce(&mut Document) -> R) -> AppResult<R> {
        let _turn = self.write_turn.lock().await;
        let mut document = self.store.load().await?;
        let result = f(&mut document);
        self.store.save(&document).await?;
        Ok(result)
    }

    /// Check that the document can be loaded.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.store.load().await.map(|_| true)
    }
}
