//! # ERP Core
//!
//! Domain entities, services, repository traits, and the authorization
//! policy for the multi-tenant ERP platform.

pub mod authorization;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// Re-export domain entities
pub use authorization::{authorize, can_access, Session};
pub use domain::*;
pub use error::DomainError;
