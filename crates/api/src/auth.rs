//! Bearer tokens and password hashing.

use std::time::Duration;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{
    decode, encode, get_current_timestamp, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Identity carried inside a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email.
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Issued at, seconds since the epoch.
    pub iat: u64,
    /// Expiry, seconds since the epoch.
    pub exp: u64,
}

/// Issues and verifies HS256 bearer tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Sign a token for `email` that expires after the configured TTL.
    pub fn issue(&self, email: &str, name: &str) -> Result<String, ApiError> {
        let now = get_current_timestamp();
        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::Internal(format!("failed to sign token: {}", e)))
    }

    /// Check signature and expiry and return the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| ApiError::InvalidToken(format!("{:?}", e.kind())))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` value.
fn parse_bearer(value: &str) -> Result<&str, ApiError> {
    let mut parts = value.splitn(2, ' ');
    match (parts.next(), parts.next()) {
        (Some(scheme), Some(token))
            if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
        {
            Ok(token.trim())
        }
        _ => Err(ApiError::MalformedToken),
    }
}

/// The authenticated caller, resolved from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(ApiError::MissingToken)?
            .to_str()
            .map_err(|_| ApiError::MalformedToken)?;

        let claims = state.tokens.verify(parse_bearer(header)?)?;

        Ok(AuthUser {
            email: claims.email,
            name: claims.name,
        })
    }
}

/// Hash a password off the async runtime.
pub async fn hash_password(password: String, cost: u32) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| ApiError::Internal(format!("hash task failed: {}", e)))?
        .map_err(|e| ApiError::Internal(format!("failed to hash password: {}", e)))
}

/// Compare a password against a stored hash off the async runtime.
pub async fn verify_password(password: String, hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| ApiError::Internal(format!("verify task failed: {}", e)))?
        .map_err(|e| ApiError::Internal(format!("failed to verify password: {}", e)))
}
