//! Account registration, login, and admin bootstrap.

pub mod service;

pub use service::{AdminBootstrap, AuthService, AuthSession, Registration};
