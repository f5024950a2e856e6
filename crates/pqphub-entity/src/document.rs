//! The persisted document holding every collection.

use serde::{Deserialize, Serialize};

use crate::{Paper, PaperFile, Subject, User};

/// Root of the JSON document store.
///
/// Missing collections deserialize as empty so partial documents load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Registered accounts.
    #[serde(default)]
    pub users: Vec<User>,
    /// Subject catalog.
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Paper submissions.
    #[serde(default)]
    pub papers: Vec<Paper>,
    /// Files attached to papers.
    #[serde(default)]
    pub files: Vec<PaperFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_fills_missing_collections() {
        let doc: Document = serde_json::from_str(r#"{"subjects": []}"#).unwrap();
        assert!(doc.users.is_empty());
        assert!(doc.papers.is_empty());
        assert!(doc.files.is_empty());
    }

    #[test]
    fn test_empty_document_serializes_all_collections() {
        let json = serde_json::to_value(Document::default()).unwrap();
        for key in ["users", "subjects", "papers", "files"] {
            assert!(json[key].as_array().is_some_and(|a| a.is_empty()), "{key}");
        }
    }
}
