//! # pqphub-auth
//!
//! Authentication primitives for PQP Hub.
//!
//! ## Modules
//!
//! - `jwt`: session token claims, signing, verification, and bearer header parsing
//! - `password`: Argon2id password hashing
//! - `rbac`: role guard separating "not signed in" from "not allowed"

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, extract_bearer_token};
pub use password::PasswordHasher;
pub use rbac::require_admin;
