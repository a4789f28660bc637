//! Application error types

use thiserror::Error;

/// Process-level failures surfaced before a request ever reaches the
/// domain layer. Domain failures live in `erp-core`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
