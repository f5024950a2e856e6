//! # pqphub-storage
//!
//! Stores uploaded paper files on the local filesystem under a directory
//! tree derived from each paper's classification.

pub mod layout;
pub mod local;

pub use layout::{paper_dir, sanitize_segment, stored_filename};
pub use local::{LocalUploadStore, StoredUpload};
