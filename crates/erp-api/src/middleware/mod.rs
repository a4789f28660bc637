//! HTTP middleware

pub mod auth;

pub use auth::require_session;
