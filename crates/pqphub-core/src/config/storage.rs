//! Uploaded file storage configuration.

use serde::{Deserialize, Serialize};

/// Where and how uploaded paper files are stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for uploaded files.
    #[serde(default = "default_upload_root")]
    pub upload_root: String,
    /// Maximum accepted request body for uploads, in bytes (default 50 MiB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: usize,
    /// Maximum number of files accepted by a single upload request.
    #[serde(default = "default_max_files")]
    pub max_files_per_upload: usize,
    /// Remove a rejected paper's files from disk.
    #[serde(default = "default_remove_on_reject")]
    pub remove_files_on_reject: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_root: default_upload_root(),
            max_upload_size_bytes: default_max_upload(),
            max_files_per_upload: default_max_files(),
            remove_files_on_reject: default_remove_on_reject(),
        }
    }
}

fn default_upload_root() -> String {
    "uploads".to_string()
}

fn default_max_upload() -> usize {
    50 * 1024 * 1024
}

fn default_max_files() -> usize {
    40
}

fn default_remove_on_reject() -> bool {
    true
}
