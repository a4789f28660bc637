// ============================================================================
// ERP API - Auth Middleware
// File: crates/erp-api/src/middleware/auth.rs
// ============================================================================
//! Bearer token validation applied uniformly to every protected route.
//!
//! A missing token is 401; an invalid or expired one is 403. On success the
//! derived `Session` is inserted into request extensions for handlers.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use erp_core::error::DomainError;

use crate::error::{domain_error, ApiFailure};
use crate::state::AppState;

pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiFailure> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| domain_error(DomainError::Unauthorized))?;

    let session = state.auth.authenticate(token).map_err(domain_error)?;

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("abc.def.ghi"), None);
    }
}
