//! Whole-document persistence backends.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use pqphub_core::result::AppResult;
use pqphub_entity::Document;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Reads and writes the complete document.
///
/// Implementations never cache between calls; every `load` reflects the
/// last successful `save`.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Return the full document, creating an empty one if none exists.
    async fn load(&self) -> AppResult<Document>;

    /// Replace the stored document.
    async fn save(&self, document: &Document) -> AppResult<()>;
}
