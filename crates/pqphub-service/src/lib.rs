//! # pqphub-service
//!
//! Business logic service layer for PQP Hub. Each service orchestrates
//! repositories, the upload store, and authentication primitives to
//! implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time.

pub mod auth;
pub mod catalog;
pub mod context;
pub mod paper;

pub use auth::{AdminBootstrap, AuthService, AuthSession, Registration};
pub use catalog::{CatalogService, ImportReport, NewSubject, SeedSet, SubjectInsert};
pub use context::RequestContext;
pub use paper::{CreatePaper, Download, PaperService, PaperView, UploadedFile};
