use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    application::error::ApplicationError,
    domain::models::user::{Tier, UserAccount},
};

const SESSION_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account id.
    pub sub: String,
    pub email: String,
    /// Tier at issuance time; handlers that mutate state re-read the
    /// account row instead of trusting this.
    pub tier: Tier,
    pub exp: i64,
}

/// Issues and validates HS256 session tokens.
pub struct SessionSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, account: &UserAccount) -> Result<String, ApplicationError> {
        let claims = SessionClaims {
            sub: account.id.to_string(),
            email: account.email.clone(),
            tier: account.tier,
            exp: (Utc::now() + Duration::days(SESSION_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApplicationError::InternalError(e.to_string()))
    }

    /// Any failure (bad signature, expiry, malformed token) reads as an
    /// unauthenticated request; the cause is not surfaced.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, ApplicationError> {
        decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApplicationError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn account() -> UserAccount {
        UserAccount {
            id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            password_hash: None,
            google_id: None,
            tier: Tier::Free,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let signer = SessionSigner::new("session-secret");
        let account = account();

        let token = signer.issue(&account).unwrap();
        let claims = signer.decode(&token).unwrap();

        assert_eq!(claims.sub, account.id.to_string());
        assert_eq!(claims.email, account.email);
        assert_eq!(claims.tier, Tier::Free);
    }

    #[test]
    fn token_from_other_key_is_rejected() {
        let signer = SessionSigner::new("session-secret");
        let other = SessionSigner::new("different-secret");

        let token = other.issue(&account()).unwrap();
        assert!(signer.decode(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let signer = SessionSigner::new("session-secret");
        assert!(signer.decode("not.a.token").is_err());
    }
}
