pub mod credentials;
pub mod password;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use credentials::{Credentials, CredentialsError};
pub use password::{hash_password, verify_password, PasswordError};

/// Session tokens are valid for one week from issuance.
pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the user the token was issued to
    pub id: i64,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(id: i64) -> Self {
        Self::issued_at(id, Utc::now())
    }

    pub fn issued_at(id: i64, now: DateTime<Utc>) -> Self {
        Self {
            id,
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("JWT secret is not configured")]
    NotConfigured,

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies HS256 session tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    configured: bool,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            configured: !secret.is_empty(),
        }
    }

    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.encode(&Claims::new(user_id))
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        if !self.configured {
            return Err(TokenError::NotConfigured);
        }
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)?)
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if !self.configured {
            return Err(TokenError::NotConfigured);
        }
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}
