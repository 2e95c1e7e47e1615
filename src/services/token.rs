//! Session token issuance

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::SESSION_TTL_SECONDS;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

/// Collaborator that signs a session token binding a user identity
///
/// Signing is CPU-bound and happens in-process, so the trait stays
/// synchronous.
#[cfg_attr(test, automock)]
pub trait TokenIssuer: Send + Sync {
    /// Produce an opaque signed token for the given user
    fn issue_session_token(&self, user_id: Uuid, username: &str) -> anyhow::Result<String>;
}

/// Token issuer signing HS256 JWTs with the configured secret
pub struct JwtTokenIssuer {
    secret: String,
}

impl JwtTokenIssuer {
    /// Create an issuer for the given signing secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_session_token(&self, user_id: Uuid, username: &str) -> anyhow::Result<String> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(SESSION_TTL_SECONDS);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    use super::*;

    #[test]
    fn test_issued_token_carries_identity_and_expiry() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = issuer.issue_session_token(user_id, "alice").unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(data.claims.sub, user_id.to_string());
        assert_eq!(data.claims.username, "alice");
        assert_eq!(data.claims.exp - data.claims.iat, SESSION_TTL_SECONDS);
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let token = issuer.issue_session_token(Uuid::new_v4(), "alice").unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::default(),
        );

        assert!(result.is_err());
    }
}
