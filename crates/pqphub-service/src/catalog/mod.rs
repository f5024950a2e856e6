//! Subject catalog management.

pub mod seed;
pub mod service;

pub use seed::SeedSet;
pub use service::{CatalogService, ImportReport, NewSubject, SubjectInsert};
