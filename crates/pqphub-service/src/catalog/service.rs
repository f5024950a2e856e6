//! Catalog insert with duplicate detection, listing, deletion, and seeding.

use serde::Deserialize;
use tracing::{debug, info};

use pqphub_core::error::AppError;
use pqphub_core::result::AppResult;
use pqphub_core::types::SubjectId;
use pqphub_database::repositories::SubjectRepository;
use pqphub_entity::Subject;

use super::seed::SeedSet;

/// Classification fields for a new catalog entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSubject {
    /// Program or category label.
    pub grp: String,
    /// Year label.
    pub year: String,
    /// Semester label; blank means `NA`.
    #[serde(default)]
    pub semester: String,
    /// Subject name.
    pub subject: String,
}

impl NewSubject {
    fn into_subject(self) -> Subject {
        Subject::new(
            self.grp.trim(),
            self.year.trim(),
            self.semester.trim(),
            self.subject.trim(),
        )
    }
}

/// Outcome of inserting a catalog entry.
#[derive(Debug, Clone)]
pub enum SubjectInsert {
    /// A new entry was stored.
    Inserted(Subject),
    /// An equivalent entry already exists; nothing was stored.
    AlreadyExists,
}

/// Counts from a bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries added to the catalog.
    pub inserted: usize,
    /// Entries skipped as duplicates.
    pub skipped: usize,
}

/// Manages the subject catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Subject repository.
    subjects: SubjectRepository,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(subjects: SubjectRepository) -> Self {
        Self { subjects }
    }

    /// All catalog entries in insertion order.
    pub async fn list(&self) -> AppResult<Vec<Subject>> {
        self.subjects.find_all().await
    }

    /// Insert unless an entry with the same normalized classification exists.
    pub async fn add(&self, input: NewSubject) -> AppResult<SubjectInsert> {
        if [&input.grp, &input.year, &input.subject]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AppError::validation("grp, year and subject required"));
        }

        let (grp, name) = (input.grp.clone(), input.subject.clone());
        let Some(subject) = self.subjects.insert_unique(input.into_subject()).await? else {
            debug!(grp = %grp, subject = %name, "Subject already exists");
            return Ok(SubjectInsert::AlreadyExists);
        };

        info!(subject_id = %subject.id, grp = %subject.grp, subject = %subject.subject, "Subject added");
        Ok(SubjectInsert::Inserted(subject))
    }

    /// Remove an entry by id. Deleting a missing id is not an error.
    pub async fn delete(&self, id: SubjectId) -> AppResult<bool> {
        let removed = self.subjects.delete(id).await?;
        if removed {
            info!(subject_id = %id, "Subject deleted");
        }
        Ok(removed)
    }

    /// Add a bundled set, skipping entries already present.
    pub async fn import(&self, set: SeedSet) -> AppResult<ImportReport> {
        let entries: Vec<Subject> = set
            .entries()?
            .into_iter()
            .map(NewSubject::into_subject)
            .collect();
        let total = entries.len();
        let inserted = self.subjects.insert_many_unique(entries).await?.len();
        let report = ImportReport {
            inserted,
            skipped: total - inserted,
        };

        info!(set = %set, inserted = report.inserted, skipped = report.skipped, "Subject set imported");
        Ok(report)
    }

    /// Insert the starter set when the catalog is empty.
    ///
    /// Returns the number of entries added.
    pub async fn seed_if_empty(&self) -> AppResult<usize> {
        if self.subjects.count().await? > 0 {
            debug!("Subjects already present, skipping seed");
            return Ok(0);
        }
        self.import(SeedSet::Starter).await.map(|report| report.inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pqphub_core::error::ErrorKind;
    use pqphub_database::Database;

    fn service() -> CatalogService {
        CatalogService::new(SubjectRepository::new(Database::in_memory()))
    }

    fn subject(grp: &str, year: &str, semester: &str, name: &str) -> NewSubject {
        NewSubject {
            grp: grp.into(),
            year: year.into(),
            semester: semester.into(),
            subject: name.into(),
        }
    }

    #[tokio::test]
    async fn duplicate_with_different_case_and_spacing_is_stored_once() {
        let catalog = service();
        let first = catalog
            .add(subject("CEC", "1st Year", "Semester 1", "Business Law"))
            .await
            .unwrap();
        assert!(matches!(first, SubjectInsert::Inserted(_)));

        let second = catalog
            .add(subject(" cec", "1ST YEAR", "semester 1 ", "  business law"))
            .await
            .unwrap();
        assert!(matches!(second, SubjectInsert::AlreadyExists));
        assert_eq!(catalog.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stored_values_are_trimmed_and_semester_defaults() {
        let catalog = service();
        let SubjectInsert::Inserted(stored) = catalog
            .add(subject(" Inter ", "2nd Year", "", " Maths "))
            .await
            .unwrap()
        else {
            panic!("expected insert");
        };
        assert_eq!(stored.grp, "Inter");
        assert_eq!(stored.subject, "Maths");
        assert_eq!(stored.semester, "NA");

        let again = catalog.add(subject("inter", "2nd year", "NA", "maths")).await.unwrap();
        assert!(matches!(again, SubjectInsert::AlreadyExists));
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let err = service()
            .add(subject("CEC", "", "NA", "Law"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let catalog = service();
        let SubjectInsert::Inserted(stored) = catalog
            .add(subject("BA", "1st Year", "Semester 1", "History"))
            .await
            .unwrap()
        else {
            panic!("expected insert");
        };
        assert!(catalog.delete(stored.id).await.unwrap());
        assert!(!catalog.delete(stored.id).await.unwrap());
    }

    #[tokio::test]
    async fn seed_only_fills_an_empty_catalog() {
        let catalog = service();
        assert_eq!(catalog.seed_if_empty().await.unwrap(), 37);
        assert_eq!(catalog.seed_if_empty().await.unwrap(), 0);
        assert_eq!(catalog.list().await.unwrap().len(), 37);
    }

    #[tokio::test]
    async fn full_import_skips_starter_entries() {
        let catalog = service();
        catalog.seed_if_empty().await.unwrap();
        let report = catalog.import(SeedSet::Full).await.unwrap();
        assert!(report.skipped > 0);

        let total = catalog.list().await.unwrap().len();
        assert_eq!(total, 37 + report.inserted);

        let again = catalog.import(SeedSet::Full).await.unwrap();
        assert_eq!(again.inserted, 0);
    }

    #[tokio::test]
    async fn concurrent_identical_adds_store_one() {
        let catalog = service();
        let tasks: Vec<_> = (0..10)
            .map(|i| {
                let catalog = catalog.clone();
                let name = if i % 2 == 0 { "Organic Chemistry" } else { " organic chemistry " };
                tokio::spawn(async move {
                    catalog
                        .add(subject("MPC", "2nd Year", "Semester 3", name))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut inserted = 0;
        for task in tasks {
            if matches!(task.await.unwrap(), SubjectInsert::Inserted(_)) {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(catalog.list().await.unwrap().len(), 1);
    }
}
