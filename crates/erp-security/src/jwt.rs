//! JWT token handling
//!
//! Tokens carry the tenant binding alongside the user identity. Every
//! request is scoped by the `tenant_id` claim after validation; the
//! super-admin account has no tenant binding (`tenant_id` is `None`).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Token expired")]
    TokenExpired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<Uuid>,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtService {
    secret: String,
    token_expiry_hours: i64,
}

impl JwtService {
    pub fn new(secret: String, token_expiry_hours: i64) -> Self {
        Self {
            secret,
            token_expiry_hours,
        }
    }

    pub fn generate_token(
        &self,
        user_id: &Uuid,
        tenant_id: Option<Uuid>,
        email: &str,
        role: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            tenant_id,
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_expiry_hours)).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
            _ => JwtError::ValidationError(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret".to_string(), 24)
    }

    #[test]
    fn test_token_round_trip() {
        let user_id = Uuid::new_v4();
        let tenant_id = Uuid::new_v4();
        let token = service()
            .generate_token(&user_id, Some(tenant_id), "a@x.com", "admin")
            .unwrap();

        let claims = service().validate_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.tenant_id, Some(tenant_id));
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_superadmin_token_has_no_tenant() {
        let user_id = Uuid::new_v4();
        let token = service()
            .generate_token(&user_id, None, "superadmin@yourcompany.com", "superadmin")
            .unwrap();

        let claims = service().validate_token(&token).unwrap();
        assert_eq!(claims.tenant_id, None);
        assert_eq!(claims.role, "superadmin");
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative expiry pushes exp beyond the default validation leeway.
        let expired = JwtService::new("test-secret".to_string(), -1);
        let token = expired
            .generate_token(&Uuid::new_v4(), None, "a@x.com", "admin")
            .unwrap();

        let err = service().validate_token(&token).unwrap_err();
        assert!(matches!(err, JwtError::TokenExpired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service()
            .generate_token(&Uuid::new_v4(), None, "a@x.com", "admin")
            .unwrap();

        let other = JwtService::new("other-secret".to_string(), 24);
        assert!(matches!(
            other.validate_token(&token),
            Err(JwtError::ValidationError(_))
        ));
    }
}
