//! JSON file document store.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{info, warn};

use pqphub_core::error::{AppError, ErrorKind};
use pqphub_core::result::AppResult;
use pqphub_entity::Document;

use super::DocumentStore;

/// Persists the document as pretty-printed JSON in a single file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a reader sees either the old or the new document.
///
/// Loading is lenient: a record that does not fit the schema is dropped
/// and the file is copied to `<name>.corrupt-<millis>` before the cleaned
/// document is written back. A file that
/// is not JSON at all is moved to that name before an empty document
/// replaces it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given path. Nothing is touched until first use.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the document file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "db.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "db.json".into());
        name.push(format!(".corrupt-{}", Utc::now().timestamp_millis()));
        self.path.with_file_name(name)
    }

    async fn reset(&self) -> AppResult<Document> {
        let document = Document::default();
        self.save(&document).await?;
        Ok(document)
    }
}

/// Decodes each collection record by record, dropping entries that do not
/// fit the schema. Returns the document and the number of dropped entries.
fn decode_lenient(mut root: Map<String, Value>) -> (Document, usize) {
    let mut skipped = 0;
    let document = Document {
        users: collection(&mut root, "users", &mut skipped),
        subjects: collection(&mut root, "subjects", &mut skipped),
        papers: collection(&mut root, "papers", &mut skipped),
        files: collection(&mut root, "files", &mut skipped),
    };
    (document, skipped)
}

fn collection<T: DeserializeOwned>(
    root: &mut Map<String, Value>,
    key: &str,
    skipped: &mut usize,
) -> Vec<T> {
    let records = match root.remove(key) {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(records)) => records,
        Some(_) => {
            warn!(collection = key, "Collection is not an array, ignoring it");
            *skipped += 1;
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(err) => {
                warn!(collection = key, index, error = %err, "Skipping malformed record");
                *skipped += 1;
                None
            }
        })
        .collect()
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> AppResult<Document> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == IoErrorKind::NotFound => {
                info!(path = %self.path.display(), "Document missing, creating empty store");
                return self.reset().await;
            }
            Err(err) => {
                return Err(AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to read {}", self.path.display()),
                    err,
                ));
            }
        };

        let root = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(root)) => root,
            Ok(_) => {
                return Err(AppError::database(format!(
                    "{} does not hold a JSON object",
                    self.path.display()
                )));
            }
            Err(err) => {
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    info!(path = %self.path.display(), "Document empty, creating empty store");
                } else {
                    let backup = self.backup_path();
                    tokio::fs::rename(&self.path, &backup).await.map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Database,
                            format!("Failed to move aside {}", self.path.display()),
                            e,
                        )
                    })?;
                    warn!(
                        path = %self.path.display(),
                        backup = %backup.display(),
                        error = %err,
                        "Document unreadable, recreating empty store"
                    );
                }
                return self.reset().await;
            }
        };

        let (document, skipped) = decode_lenient(root);
        if skipped > 0 {
            let backup = self.backup_path();
            tokio::fs::copy(&self.path, &backup).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to copy {}", self.path.display()),
                    e,
                )
            })?;
            warn!(
                path = %self.path.display(),
                backup = %backup.display(),
                skipped,
                "Skipped malformed records, rewriting document"
            );
            self.save(&document).await?;
        }
        Ok(document)
    }

    async fn save(&self, document: &Document) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to create {}", parent.display()),
                    e,
                )
            })?;
        }

        let data = serde_json::to_vec_pretty(document)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to write document", e)
        })?;
        tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to replace document", e)
        })
    }
}
