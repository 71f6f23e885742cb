//! HS256 token issue/validate seam.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use innkeep_core::AdminId;

use crate::claims::{validate_claims, AdminClaims, TokenValidationError};

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("token could not be decoded")]
    Decode(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Validates a bearer token into admin claims.
///
/// Trait seam so the HTTP middleware can be tested with a stub validator.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, JwtError>;
}

/// HS256 symmetric-key issuer + validator.
pub struct Hs256Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Hs256Jwt {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token for an admin, valid for `ttl` from `now`.
    pub fn issue(
        &self,
        admin_id: AdminId,
        username: impl Into<String>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        let claims = AdminClaims {
            sub: admin_id,
            username: username.into(),
            issued_at: now,
            expires_at: now + ttl,
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    // Expiry lives in our own claim fields, so the library's `exp`
    // handling is switched off and `validate_claims` does the time checks.
    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }
}

impl JwtValidator for Hs256Jwt {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, JwtError> {
        let data =
            jsonwebtoken::decode::<AdminClaims>(token, &self.decoding, &Self::validation())?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_valid_token() {
        let jwt = Hs256Jwt::new(b"test-secret");
        let admin_id = AdminId::new();
        let now = Utc::now();

        let token = jwt
            .issue(admin_id, "frontdesk", now, Duration::minutes(30))
            .unwrap();
        let claims = jwt.validate(&token, now).unwrap();

        assert_eq!(claims.sub, admin_id);
        assert_eq!(claims.username, "frontdesk");
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let issuer = Hs256Jwt::new(b"secret-a");
        let validator = Hs256Jwt::new(b"secret-b");
        let now = Utc::now();

        let token = issuer
            .issue(AdminId::new(), "frontdesk", now, Duration::minutes(30))
            .unwrap();

        assert!(matches!(
            validator.validate(&token, now),
            Err(JwtError::Decode(_))
        ));
    }

    #[test]
    fn rejects_an_expired_token() {
        let jwt = Hs256Jwt::new(b"test-secret");
        let issued = Utc::now() - Duration::hours(2);

        let token = jwt
            .issue(AdminId::new(), "frontdesk", issued, Duration::minutes(30))
            .unwrap();

        assert!(matches!(
            jwt.validate(&token, Utc::now()),
            Err(JwtError::Claims(TokenValidationError::Expired))
        ));
    }

    #[test]
    fn rejects_garbage() {
        let jwt = Hs256Jwt::new(b"test-secret");
        assert!(jwt.validate("not-a-token", Utc::now()).is_err());
    }
}
