//! Local filesystem upload store.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use pqphub_core::config::StorageConfig;
use pqphub_core::error::{AppError, ErrorKind};
use pqphub_core::result::AppResult;
use pqphub_entity::Paper;

use crate::layout::{paper_dir, stored_filename};

/// Location of a file written by [`LocalUploadStore::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Generated on-disk filename.
    pub filename: String,
    /// Full path of the stored file, including the upload root.
    pub filepath: String,
}

/// Writes, reads, and removes uploaded files below a root directory.
#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    /// Root directory for all uploads.
    root: PathBuf,
}

impl LocalUploadStore {
    /// Create a store rooted at the given path, creating it if needed.
    pub async fn new(root: impl AsRef<Path>) -> AppResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Create a store from configuration.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        Self::new(&config.upload_root).await
    }

    /// Write a new file into the paper's directory.
    pub async fn save(&self, paper: &Paper, original_name: &str, data: Bytes) -> AppResult<StoredUpload> {
        let dir = self.root.join(paper_dir(paper));
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create directory: {}", dir.display()),
                e,
            )
        })?;

        let filename = stored_filename(original_name);
        let path = dir.join(&filename);
        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {}", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Stored upload");
        Ok(StoredUpload {
            filename,
            filepath: path.to_string_lossy().into_owned(),
        })
    }

    /// Read a stored file. A missing file is a not-found error.
    pub async fn read(&self, filepath: &str) -> AppResult<Bytes> {
        fs::read(filepath).await.map(Bytes::from).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found("File missing on disk")
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file: {filepath}"),
                    e,
                )
            }
        })
    }

    /// Remove a stored file. Removing a missing file succeeds.
    pub async fn delete(&self, filepath: &str) -> AppResult<()> {
        match fs::remove_file(filepath).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete file: {filepath}"),
                e,
            )),
        }
    }

    /// Remove the paper's directory and anything left in it.
    pub async fn delete_paper_dir(&self, paper: &Paper) -> AppResult<()> {
        let dir = self.root.join(paper_dir(paper));
        match fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete directory: {}", dir.display()),
                e,
            )),
        }
    }

    /// Check that the upload root is a usable directory.
    pub async fn health_check(&self) -> bool {
        fs::metadata(&self.root)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}
