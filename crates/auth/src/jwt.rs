//! Bearer token verification (HS256).

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use crate::claims::{JwtClaims, TokenValidationError, validate_claims};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JwtError {
    /// Signature mismatch, wrong algorithm, or an unparsable token/payload.
    #[error("token could not be decoded: {0}")]
    Decode(String),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Verifies a raw bearer token and yields its claims.
///
/// Held behind `Arc<dyn JwtValidator>` so callers can swap the implementation.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, JwtError>;
}

/// Shared-secret HS256 validator.
pub struct Hs256JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256JwtValidator {
    pub fn new(secret: Vec<u8>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time window is checked by `validate_claims` against an explicit clock.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(&secret),
            validation,
        }
    }
}

impl core::fmt::Debug for Hs256JwtValidator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hs256JwtValidator").finish_non_exhaustive()
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, JwtError> {
        let data = decode::<JwtClaims>(token, &self.key, &self.validation)
            .map_err(|e| JwtError::Decode(e.to_string()))?;

        validate_claims(&data.claims, now)?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use chrono::Duration;
    use enrollhub_core::StudentId;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn mint(secret: &str, claims: &impl serde::Serialize) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn student_claims(now: DateTime<Utc>) -> JwtClaims {
        JwtClaims::new(
            "user4@abc.com",
            Some(StudentId::parse("650610001").unwrap()),
            Role::Student,
            now,
            Duration::minutes(10),
        )
    }

    #[test]
    fn accepts_token_signed_with_same_secret() {
        let now = Utc::now();
        let claims = student_claims(now);
        let token = mint("test-secret", &claims);

        let v = Hs256JwtValidator::new(b"test-secret".to_vec());
        assert_eq!(v.validate(&token, now).unwrap(), claims);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let now = Utc::now();
        let token = mint("someone-else", &student_claims(now));

        let v = Hs256JwtValidator::new(b"test-secret".to_vec());
        assert!(matches!(v.validate(&token, now), Err(JwtError::Decode(_))));
    }

    #[test]
    fn rejects_tampered_payload() {
        let now = Utc::now();
        let token = mint("test-secret", &student_claims(now));
        let admin = mint(
            "other",
            &JwtClaims::new("user4@abc.com", None, Role::Admin, now, Duration::minutes(10)),
        );

        // Graft the admin payload onto the student signature.
        let parts: Vec<&str> = token.split('.').collect();
        let admin_parts: Vec<&str> = admin.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], admin_parts[1], parts[2]);

        let v = Hs256JwtValidator::new(b"test-secret".to_vec());
        assert!(matches!(v.validate(&forged, now), Err(JwtError::Decode(_))));
    }

    #[test]
    fn rejects_expired_token() {
        let issued = Utc::now() - Duration::hours(2);
        let token = mint("test-secret", &student_claims(issued));

        let v = Hs256JwtValidator::new(b"test-secret".to_vec());
        assert_eq!(
            v.validate(&token, Utc::now()),
            Err(JwtError::Claims(TokenValidationError::Expired))
        );
    }

    #[test]
    fn accepts_token_without_iat() {
        let now = Utc::now();
        let payload = serde_json::json!({
            "username": "user1@abc.com",
            "role": "ADMIN",
            "exp": (now + Duration::minutes(5)).timestamp(),
        });
        let token = mint("test-secret", &payload);

        let v = Hs256JwtValidator::new(b"test-secret".to_vec());
        let claims = v.validate(&token, now).unwrap();
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.iat, None);
    }

    #[test]
    fn accepts_token_without_exp() {
        let now = Utc::now();
        let payload = serde_json::json!({
            "username": "user4@abc.com",
            "studentId": "650610001",
            "role": "STUDENT",
            "iat": now.timestamp(),
        });
        let token = mint("test-secret", &payload);

        let v = Hs256JwtValidator::new(b"test-secret".to_vec());
        let claims = v.validate(&token, now + Duration::days(365)).unwrap();
        assert_eq!(claims.exp, None);
        assert_eq!(claims.username, "user4@abc.com");
    }

    #[test]
    fn rejects_garbage() {
        let v = Hs256JwtValidator::new(b"test-secret".to_vec());
        assert!(matches!(v.validate("not-a-jwt", Utc::now()), Err(JwtError::Decode(_))));
    }
}
