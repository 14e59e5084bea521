//! Password hashing and login-token issuance.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ServiceError;

#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
    token_lifetime: Duration,
}

impl AuthConfig {
    pub fn new(secret: String, token_lifetime: Duration) -> Self {
        Self {
            secret,
            token_lifetime,
        }
    }
}

/// JWT claims carried by the login token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: i32,
    pub iat: i64,
    pub exp: i64,
}

pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::InternalError(format!("password hashing failed: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, ServiceError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ServiceError::InternalError(format!("stored hash unreadable: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub fn issue_token(config: &AuthConfig, user_id: i32, username: &str) -> Result<String, ServiceError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: username.to_string(),
        uid: user_id,
        iat: now,
        exp: now + config.token_lifetime.as_secs() as i64,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| ServiceError::InternalError(format!("token encoding failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("gizli-parola").unwrap();
        assert!(verify_password("gizli-parola", &hash).unwrap());
        assert!(!verify_password("yanlis-parola", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("aynisi").unwrap();
        let b = hash_password("aynisi").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn token_is_issued() {
        let cfg = AuthConfig::new("test-secret".to_string(), Duration::from_secs(3600));
        let token = issue_token(&cfg, 7, "deneme").unwrap();
        assert_eq!(token.split('.').count(), 3);
    }
}
