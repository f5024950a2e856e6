//! Paper entities.

pub mod filter;
pub mod model;

pub use filter::PaperFilter;
pub use model::{NewPaper, Paper};
