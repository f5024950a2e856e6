//! Paper file model.

use pqphub_core::types::{FileId, PaperId};
use serde::{Deserialize, Serialize};

/// A file attached to a paper and stored under the upload root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperFile {
    /// Unique file identifier.
    pub id: FileId,
    /// Owning paper.
    pub paper_id: PaperId,
    /// Name of the file on disk.
    pub filename: String,
    /// Name supplied by the client at upload.
    pub originalname: String,
    /// Path of the stored file.
    pub filepath: String,
    /// MIME type reported at upload.
    pub mimetype: String,
}
