//! # pqphub-entity
//!
//! Domain entity models for PQP Hub. Every struct in this crate is either
//! a record stored in the JSON document or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod document;
pub mod file;
pub mod paper;
pub mod subject;
pub mod user;

pub use document::Document;
pub use file::PaperFile;
pub use paper::{Paper, PaperFilter};
pub use subject::Subject;
pub use user::{User, UserProfile, UserRole};
