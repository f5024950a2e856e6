//! HTTP route handlers.

pub mod admin;
pub mod auth;
pub mod files;
pub mod health;
pub mod papers;
pub mod subjects;
pub mod upload;
