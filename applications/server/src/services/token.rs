/// Token service - issues and verifies signed identity assertions
use crate::error::{Result, ServerError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use quill_core::{User, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default token lifetime: 36000 minutes (600 hours)
pub const DEFAULT_TOKEN_EXPIRATION_MINUTES: i64 = 36_000;

/// Identity assertion carried by a bearer token
///
/// `user` is a snapshot taken at issuance; later profile changes are not
/// reflected until a new token is issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub user: User,
    pub iat: i64, // Issued at
    pub exp: i64, // Expiration time
}

impl Claims {
    pub fn user_id(&self) -> UserId {
        UserId::new(self.sub.clone())
    }
}

/// Signs and verifies HS256 tokens with a secret fixed at construction
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration: Duration,
}

impl TokenService {
    pub fn new(secret: &str, expiration: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration,
        }
    }

    /// Token service with the default 36000 minute lifetime
    pub fn with_default_expiration(secret: &str) -> Self {
        Self::new(secret, Duration::minutes(DEFAULT_TOKEN_EXPIRATION_MINUTES))
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    /// Issue a token embedding a snapshot of `user`
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let exp = now + self.expiration;

        let claims = Claims {
            sub: user.id.as_str().to_string(),
            user: user.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(ServerError::from)
    }

    /// Verify signature, structure and expiry of a token
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("expiration", &self.expiration)
            .finish_non_exhaustive()
    }
}
