//! Paper file repository implementation.

use pqphub_core::result::AppResult;
use pqphub_core::types::{FileId, PaperId};
use pqphub_entity::PaperFile;

use crate::connection::Database;

/// Repository for file records attached to papers.
#[derive(Debug, Clone)]
pub struct FileRepository {
    db: Database,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Append a file record.
    pub async fn add(&self, file: PaperFile) -> AppResult<PaperFile> {
        self.db
            .commit(|doc| {
                doc.files.push(file.clone());
                file
            })
            .await
    }

    /// All files belonging to a paper, in upload order.
    pub async fn find_by_paper(&self, paper_id: PaperId) -> AppResult<Vec<PaperFile>> {
        self.db
            .read(|doc| {
                doc.files
                    .iter()
                    .filter(|f| f.paper_id == paper_id)
                    .cloned()
                    .collect()
            })
            .await
    }

    /// Find a file by primary key.
    pub async fn find_by_id(&self, id: FileId) -> AppResult<Option<PaperFile>> {
        self.db
            .read(|doc| doc.files.iter().find(|f| f.id == id).cloned())
            .await
    }
}
