//! Paper repository implementation.

use pqphub_core::result::AppResult;
use pqphub_core::types::PaperId;
use pqphub_entity::{Paper, PaperFile, PaperFilter};

use crate::connection::Database;

/// Number of papers returned by [`PaperRepository::most_downloaded`].
pub const MOST_DOWNLOADED_LIMIT: usize = 10;

/// Repository for paper records and their approval and download state.
#[derive(Debug, Clone)]
pub struct PaperRepository {
    db: Database,
}

impl PaperRepository {
    /// Create a new paper repository.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Store a new paper.
    pub async fn create(&self, paper: Paper) -> AppResult<Paper> {
        self.db
            .commit(|doc| {
                doc.papers.push(paper.clone());
                paper
            })
            .await
    }

    /// Papers matching the filter, newest first.
    pub async fn find_all(&self, filter: &PaperFilter) -> AppResult<Vec<Paper>> {
        self.db
            .read(|doc| {
                let mut papers: Vec<Paper> = doc
                    .papers
                    .iter()
                    .filter(|p| filter.matches(p))
                    .cloned()
                    .collect();
                papers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                papers
            })
            .await
    }

    /// Find a paper by primary key.
    pub async fn find_by_id(&self, id: PaperId) -> AppResult<Option<Paper>> {
        self.db
            .read(|doc| doc.papers.iter().find(|p| p.id == id).cloned())
            .await
    }

    /// Mark a paper approved. Returns `false` if it does not exist.
    ///
    /// Approving an approved paper succeeds without writing.
    pub async fn approve(&self, id: PaperId) -> AppResult<bool> {
        let exists = self
            .db
            .read(|doc| doc.papers.iter().find(|p| p.id == id).map(|p| p.approved))
            .await?;
        match exists {
            None => Ok(false),
            Some(true) => Ok(true),
            Some(false) => self
                .db
                .mutate(|doc| {
                    let paper = doc.papers.iter_mut().find(|p| p.id == id)?;
                    paper.approved = true;
                    Some(())
                })
                .await
                .map(|updated| updated.is_some()),
        }
    }

    /// Remove a paper and every file record attached to it.
    ///
    /// Returns the removed file records, or `None` if the paper did not exist.
    pub async fn delete(&self, id: PaperId) -> AppResult<Option<Vec<PaperFile>>> {
        self.db
            .mutate(|doc| {
                let index = doc.papers.iter().position(|p| p.id == id)?;
                doc.papers.remove(index);
                let (removed, kept): (Vec<_>, Vec<_>) =
                    doc.files.drain(..).partition(|f| f.paper_id == id);
                doc.files = kept;
                Some(removed)
            })
            .await
    }

    /// Add one to a paper's download counter. Returns `false` if absent.
    pub async fn increment_downloads(&self, id: PaperId) -> AppResult<bool> {
        self.db
            .mutate(|doc| {
                let paper = doc.papers.iter_mut().find(|p| p.id == id)?;
                paper.downloads = paper.downloads.saturating_add(1);
                Some(())
            })
            .await
            .map(|updated| updated.is_some())
    }

    /// Top papers by download count regardless of approval.
    ///
    /// Ties keep newest-first order.
    pub async fn most_downloaded(&self, limit: usize) -> AppResult<Vec<Paper>> {
        let mut papers = self.find_all(&PaperFilter::default()).await?;
        papers.sort_by(|a, b| b.downloads.cmp(&a.downloads));
        papers.truncate(limit);
        Ok(papers)
    }
}
