//! In-memory document store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use pqphub_core::result::AppResult;
use pqphub_entity::Document;

use super::DocumentStore;

/// Keeps the document in process memory. Used by tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<Document>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> AppResult<Document> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: &Document) -> AppResult<()> {
        *self.document.write().await = document.clone();
        Ok(())
    }
}
