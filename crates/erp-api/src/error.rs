//! HTTP mapping for domain errors
//!
//! Validation and authorization failures surface with a stable code;
//! unexpected store failures are logged server-side and collapsed to a
//! generic message. Not-found never distinguishes "absent" from "owned by
//! another tenant".

use axum::http::StatusCode;
use axum::Json;
use tracing::error;

use erp_core::error::DomainError;

use crate::response::ApiResponse;

pub type ApiFailure = (StatusCode, Json<ApiResponse<()>>);

pub fn domain_error(err: DomainError) -> ApiFailure {
    let (status, code, message) = match &err {
        DomainError::ValidationError(msg) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
        }
        DomainError::InsufficientStock | DomainError::InvalidStatusTransition(_, _) => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            err.to_string(),
        ),
        DomainError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "Invalid credentials".to_string(),
        ),
        DomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Access token required".to_string(),
        ),
        DomainError::Forbidden => (
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "Access denied".to_string(),
        ),
        DomainError::TenantNotFound
        | DomainError::CustomerNotFound
        | DomainError::ProductNotFound
        | DomainError::SalesOrderNotFound
        | DomainError::LedgerEntryNotFound => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
        }
        DomainError::EmailAlreadyExists(_) => (
            StatusCode::CONFLICT,
            "CONFLICT",
            "User already exists".to_string(),
        ),
        DomainError::Unavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            "UNAVAILABLE",
            "Service temporarily unavailable".to_string(),
        ),
        DomainError::PasswordHashError(_)
        | DomainError::TokenGenerationError(_)
        | DomainError::DatabaseError(_)
        | DomainError::InternalError(_) => {
            error!("Internal error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    };

    (status, Json(ApiResponse::error(code, &message)))
}

pub fn validation_error(message: &str) -> ApiFailure {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error("VALIDATION_ERROR", message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_map_to_404() {
        let (status, _) = domain_error(DomainError::CustomerNotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = domain_error(DomainError::TenantNotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_detail_not_leaked() {
        let (status, Json(body)) =
            domain_error(DomainError::DatabaseError("connection refused".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body.error.unwrap().message;
        assert!(!message.contains("connection refused"));
    }

    #[test]
    fn test_pool_exhaustion_maps_to_503() {
        let (status, _) = domain_error(DomainError::Unavailable);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let (status, _) = domain_error(DomainError::EmailAlreadyExists("a@x.com".to_string()));
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
