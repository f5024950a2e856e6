//! Stored paper file entities.

pub mod model;

pub use model::PaperFile;
