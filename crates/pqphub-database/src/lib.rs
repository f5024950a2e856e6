//! # pqphub-database
//!
//! Document persistence and concrete repository implementations for all
//! PQP Hub entities. Every collection lives in a single JSON document that
//! is loaded, mutated and written back in full for each operation.

pub mod connection;
pub mod repositories;
pub mod store;

pub use connection::Database;
pub use store::{DocumentStore, JsonFileStore, MemoryStore};
