//! Subject catalog entities.

pub mod model;

pub use model::{SEMESTER_NA, Subject, SubjectKey};
