//! Compact JSON Web Tokens (RFC 7519) signed with HMAC-SHA256
//!
//! Only `HS256` is accepted. `exp` is checked when the payload carries one
//! and is otherwise optional, since document server payloads rarely have it.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims wrapper adding `iat` and an optional `exp` next to the caller's fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedClaims<C> {
    #[serde(flatten)]
    pub claims: C,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl<C> TimedClaims<C> {
    /// Stamp `claims` with the current time, expiring after `ttl` when given
    pub fn new(claims: C, ttl: Option<Duration>) -> Self {
        let now = Utc::now();
        Self {
            claims,
            iat: now.timestamp(),
            exp: ttl.map(|ttl| (now + ttl).timestamp()),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Malformed token")]
    Malformed(#[source] jsonwebtoken::errors::Error),

    #[error("Unsupported algorithm")]
    UnsupportedAlgorithm,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Signing secret is empty")]
    EmptySecret,

    #[error("Token error: {0}")]
    Other(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for JwtError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => JwtError::InvalidSignature,
            JwtErrorKind::ExpiredSignature => JwtError::Expired,
            JwtErrorKind::InvalidAlgorithm
            | JwtErrorKind::InvalidAlgorithmName
            | JwtErrorKind::MissingAlgorithm => JwtError::UnsupportedAlgorithm,
            JwtErrorKind::InvalidToken
            | JwtErrorKind::Base64(_)
            | JwtErrorKind::Json(_)
            | JwtErrorKind::Utf8(_) => JwtError::Malformed(err),
            _ => JwtError::Other(err),
        }
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_aud = false;
    validation.leeway = 0;
    validation
}

/// Sign `claims` into a compact HS256 token
pub fn sign<C>(claims: &C, secret: &[u8]) -> Result<String, JwtError>
where
    C: Serialize,
{
    if secret.is_empty() {
        return Err(JwtError::EmptySecret);
    }

    Ok(encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )?)
}

/// Verify a compact HS256 token and decode its claims
///
/// A numeric `exp` claim in the past fails with [`JwtError::Expired`].
pub fn verify<C>(token: &str, secret: &[u8]) -> Result<C, JwtError>
where
    C: DeserializeOwned + Clone,
{
    if secret.is_empty() {
        return Err(JwtError::EmptySecret);
    }

    let data = decode::<C>(
        token.trim(),
        &DecodingKey::from_secret(secret),
        &validation(),
    )?;
    Ok(data.claims)
}
