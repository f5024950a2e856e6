//! Role-based access control.

pub mod guard;

pub use guard::require_admin;
