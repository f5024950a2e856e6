//! Paper submission, moderation, attachment, and download tracking.

use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use pqphub_core::config::StorageConfig;
use pqphub_core::error::AppError;
use pqphub_core::result::AppResult;
use pqphub_core::types::{FileId, PaperId};
use pqphub_database::repositories::paper::MOST_DOWNLOADED_LIMIT;
use pqphub_database::repositories::{FileRepository, PaperRepository, UserRepository};
use pqphub_entity::paper::NewPaper;
use pqphub_entity::{Paper, PaperFile, PaperFilter};
use pqphub_storage::LocalUploadStore;

use super::view::PaperView;
use crate::context::RequestContext;

/// MIME type recorded when the client sends none.
const FALLBACK_MIMETYPE: &str = "application/octet-stream";

/// Fields supplied when starting a submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePaper {
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Program or category label.
    #[serde(default)]
    pub grp: String,
    /// Year label.
    #[serde(default)]
    pub year: String,
    /// Semester label; blank means `NA`.
    #[serde(default)]
    pub semester: String,
    /// Subject name.
    #[serde(default)]
    pub subject: String,
}

/// One file received in an upload request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied filename.
    pub original_name: String,
    /// Client-supplied MIME type.
    pub content_type: Option<String>,
    /// File contents.
    pub data: Bytes,
}

/// A file record with its contents.
#[derive(Debug, Clone)]
pub struct Download {
    /// The file record.
    pub file: PaperFile,
    /// Bytes read from disk.
    pub data: Bytes,
}

/// Runs the pending → approved / removed workflow and file handling.
#[derive(Debug, Clone)]
pub struct PaperService {
    /// Paper repository.
    papers: PaperRepository,
    /// File repository.
    files: FileRepository,
    /// User repository, for uploader names.
    users: UserRepository,
    /// Upload store.
    uploads: LocalUploadStore,
    /// Maximum files per attach call.
    max_files_per_upload: usize,
    /// Remove stored files when a paper is rejected.
    remove_files_on_reject: bool,
}

impl PaperService {
    /// Creates a new paper service.
    pub fn new(
        papers: PaperRepository,
        files: FileRepository,
        users: UserRepository,
        uploads: LocalUploadStore,
        config: &StorageConfig,
    ) -> Self {
        Self {
            papers,
            files,
            users,
            uploads,
            max_files_per_upload: config.max_files_per_upload,
            remove_files_on_reject: config.remove_files_on_reject,
        }
    }

    /// Start a pending submission owned by the caller.
    ///
    /// The classification is not checked against the catalog.
    pub async fn create(&self, ctx: &RequestContext, input: CreatePaper) -> AppResult<Paper> {
        if [&input.title, &input.grp, &input.year, &input.subject]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AppError::validation("title, grp, year and subject required"));
        }

        let paper = self
            .papers
            .create(Paper::new(NewPaper {
                title: input.title.trim().to_string(),
                grp: input.grp.trim().to_string(),
                year: input.year.trim().to_string(),
                semester: input.semester,
                subject: input.subject.trim().to_string(),
                uploaded_by: ctx.user_id,
            }))
            .await?;

        info!(paper_id = %paper.id, user_id = %ctx.user_id, title = %paper.title, "Paper created");
        Ok(paper)
    }

    /// Papers matching the filter, newest first, with uploader names.
    pub async fn list(&self, filter: &PaperFilter) -> AppResult<Vec<PaperView>> {
        let papers = self.papers.find_all(filter).await?;
        let users = self.users.find_all().await?;
        Ok(PaperView::join(papers, &users))
    }

    /// Find a paper by id.
    pub async fn get(&self, id: PaperId) -> AppResult<Option<Paper>> {
        self.papers.find_by_id(id).await
    }

    /// Approve a paper. Returns `false` if it does not exist.
    pub async fn approve(&self, id: PaperId) -> AppResult<bool> {
        let approved = self.papers.approve(id).await?;
        if approved {
            info!(paper_id = %id, "Paper approved");
        }
        Ok(approved)
    }

    /// Delete a paper and its file records. Returns `false` if absent.
    ///
    /// Stored files are removed afterwards on a best-effort basis.
    pub async fn reject(&self, id: PaperId) -> AppResult<bool> {
        let paper = self.papers.find_by_id(id).await?;
        let Some(removed) = self.papers.delete(id).await? else {
            return Ok(false);
        };
        info!(paper_id = %id, files = removed.len(), "Paper rejected");

        if self.remove_files_on_reject {
            for file in &removed {
                if let Err(e) = self.uploads.delete(&file.filepath).await {
                    warn!(file_id = %file.id, error = %e, "Failed to remove rejected file");
                }
            }
            if let Some(paper) = paper {
                if let Err(e) = self.uploads.delete_paper_dir(&paper).await {
                    warn!(paper_id = %id, error = %e, "Failed to remove rejected paper directory");
                }
            }
        }
        Ok(true)
    }

    /// Store files and attach them to an existing paper.
    ///
    /// Files written before a failure stay attached.
    pub async fn attach_files(
        &self,
        ctx: &RequestContext,
        paper_id: PaperId,
        uploads: Vec<UploadedFile>,
    ) -> AppResult<Vec<PaperFile>> {
        if uploads.len() > self.max_files_per_upload {
            return Err(AppError::validation(format!(
                "At most {} files per upload",
                self.max_files_per_upload
            )));
        }

        let paper = self
            .papers
            .find_by_id(paper_id)
            .await?
            .ok_or_else(|| AppError::not_found("Paper not found"))?;

        let mut attached = Vec::with_capacity(uploads.len());
        for upload in uploads {
            let stored = self
                .uploads
                .save(&paper, &upload.original_name, upload.data)
                .await?;
            let file = self
                .files
                .add(PaperFile {
                    id: FileId::new(),
                    paper_id,
                    filename: stored.filename,
                    originalname: upload.original_name,
                    filepath: stored.filepath,
                    mimetype: upload
                        .content_type
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| FALLBACK_MIMETYPE.to_string()),
                })
                .await?;
            attached.push(file);
        }

        info!(paper_id = %paper_id, user_id = %ctx.user_id, files = attached.len(), "Files attached");
        Ok(attached)
    }

    /// File records attached to a paper.
    pub async fn files(&self, paper_id: PaperId) -> AppResult<Vec<PaperFile>> {
        self.files.find_by_paper(paper_id).await
    }

    /// Read a file and count one download against its paper.
    pub async fn download(&self, file_id: FileId) -> AppResult<Download> {
        let file = self
            .files
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))?;
        let data = self.uploads.read(&file.filepath).await?;

        if !self.papers.increment_downloads(file.paper_id).await? {
            warn!(file_id = %file.id, paper_id = %file.paper_id, "File served for a missing paper");
        }
        Ok(Download { file, data })
    }

    /// The most downloaded papers regardless of approval.
    pub async fn most_downloaded(&self) -> AppResult<Vec<Paper>> {
        self.papers.most_downloaded(MOST_DOWNLOADED_LIMIT).await
    }

    /// Whether the upload root is still a usable directory.
    pub async fn storage_healthy(&self) -> bool {
        self.uploads.health_check().await
    }
}
