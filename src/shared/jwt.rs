//! Admin Token Utility
//!
//! Signs the employee claim set into a compact HS256 token and parses it
//! back. The token is self-contained: nothing is stored server-side and a
//! token stays valid until its `exp`.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Claim set carried by an admin token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeClaims {
    /// Employee id of the bearer
    #[serde(rename = "empId")]
    pub emp_id: i64,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

impl EmployeeClaims {
    /// Claims for `emp_id` expiring `ttl_ms` milliseconds from now.
    pub fn new(emp_id: i64, ttl_ms: i64) -> Self {
        let now = Utc::now();
        Self {
            emp_id,
            iat: now.timestamp(),
            exp: (now + Duration::milliseconds(ttl_ms)).timestamp(),
        }
    }
}

/// Token errors
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token generation failed: {0}")]
    Encoding(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired | TokenError::Invalid => AppError::Unauthorized(err.to_string()),
            TokenError::Encoding(msg) => AppError::Internal(msg),
        }
    }
}

/// Sign a fresh claim set for `emp_id` with the given secret and TTL.
pub fn create_token(secret: &str, ttl_ms: i64, emp_id: i64) -> Result<String, TokenError> {
    let claims = EmployeeClaims::new(emp_id, ttl_ms);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Encoding(e.to_string()))
}

/// Verify signature and expiry, returning the claims.
pub fn parse_token(secret: &str, token: &str) -> Result<EmployeeClaims, TokenError> {
    decode::<EmployeeClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}
