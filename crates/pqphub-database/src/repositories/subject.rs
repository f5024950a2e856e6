//! Subject catalog repository implementation.

use std::collections::HashSet;

use pqphub_core::result::AppResult;
use pqphub_core::types::SubjectId;
use pqphub_entity::Subject;
use pqphub_entity::subject::SubjectKey;

use crate::connection::Database;

/// Repository for catalog entries.
///
/// Inserts skip entries whose [`SubjectKey`] is already present. The check
/// and the append happen in one store turn.
#[derive(Debug, Clone)]
pub struct SubjectRepository {
    db: Database,
}

impl SubjectRepository {
    /// Create a new subject repository.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Append an entry. Returns `None` when a duplicate exists.
    pub async fn insert_unique(&self, subject: Subject) -> AppResult<Option<Subject>> {
        self.insert_many_unique(vec![subject])
            .await
            .map(|inserted| inserted.into_iter().next())
    }

    /// Append the entries that duplicate neither the catalog nor an earlier
    /// entry of the batch. Returns the appended entries.
    pub async fn insert_many_unique(&self, subjects: Vec<Subject>) -> AppResult<Vec<Subject>> {
        self.db
            .mutate(|doc| {
                let mut seen: HashSet<SubjectKey> = doc.subjects.iter().map(Subject::key).collect();
                let fresh: Vec<Subject> = subjects
                    .into_iter()
                    .filter(|s| seen.insert(s.key()))
                    .collect();
                if fresh.is_empty() {
                    return None;
                }
                doc.subjects.extend(fresh.iter().cloned());
                Some(fresh)
            })
            .await
            .map(Option::unwrap_or_default)
    }

    /// List all entries in insertion order.
    pub async fn find_all(&self) -> AppResult<Vec<Subject>> {
        self.db.read(|doc| doc.subjects.clone()).await
    }

    /// Number of entries.
    pub async fn count(&self) -> AppResult<usize> {
        self.db.read(|doc| doc.subjects.len()).await
    }

    /// Remove one entry. Returns `false` if it did not exist.
    pub async fn delete(&self, id: SubjectId) -> AppResult<bool> {
        self.db
            .mutate(|doc| {
                let index = doc.subjects.iter().position(|s| s.id == id)?;
                doc.subjects.remove(index);
                Some(())
            })
            .await
            .map(|removed| removed.is_some())
    }
}
