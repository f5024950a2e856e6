//! Paper lifecycle: submission, moderation, files, and downloads.

pub mod service;
pub mod view;

pub use service::{CreatePaper, Download, PaperService, UploadedFile};
pub use view::PaperView;
