use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use enrollhub_core::StudentId;

use crate::Role;

/// JWT claims model (transport-agnostic).
///
/// This is the payload the identity service signs: who the caller is, which
/// student record they own (if any), and their role. `iat`/`exp` are seconds
/// since the Unix epoch; either may be absent, and only the ones present are
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub username: String,

    /// Owned student record. Admin tokens usually carry none (or an empty string).
    #[serde(
        rename = "studentId",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub student_id: Option<StudentId>,

    pub role: Role,

    /// Issued-at timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration timestamp. Tokens without one never expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl JwtClaims {
    /// Build claims valid for `ttl` starting at `now`.
    pub fn new(
        username: impl Into<String>,
        student_id: Option<StudentId>,
        role: Role,
        now: DateTime<Utc>,
        ttl: chrono::Duration,
    ) -> Self {
        Self {
            username: username.into(),
            student_id,
            role,
            iat: Some(now.timestamp()),
            exp: Some((now + ttl).timestamp()),
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<StudentId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => StudentId::parse(s).map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate the claims' time window against `now`.
///
/// Note: this validates the *claims* only. Signature verification lives in
/// [`crate::jwt`].
pub fn validate_claims(claims: &JwtClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    let now = now.timestamp();
    if let (Some(iat), Some(exp)) = (claims.iat, claims.exp) {
        if exp <= iat {
            return Err(TokenValidationError::InvalidTimeWindow);
        }
    }
    if claims.iat.is_some_and(|iat| now < iat) {
        return Err(TokenValidationError::NotYetValid);
    }
    if claims.exp.is_some_and(|exp| now >= exp) {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
