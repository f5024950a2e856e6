//! Core type definitions used across the PQP Hub workspace.

pub mod id;

pub use id::*;
