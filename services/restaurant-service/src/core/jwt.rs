// /restaurant/services/restaurant-service/src/core/jwt.rs

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::utils::{AppConfig, AppError, AppResult};

/// Claims yang disimpan di bearer token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Malformed)
    }
}

/// Alasan token ditolak, dipetakan ke status HTTP di middleware
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token has expired")]
    Expired,
    #[error("token signature or claims are invalid")]
    Invalid,
}

/// service untuk generate dan verify jwt token
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    expires_hours: i64,
}

impl JwtService {
    /// Setup JWT service dari konfigurasi aplikasi
    pub fn new(config: &AppConfig) -> Self {
        Self::with_secret(&config.jwt_secret, &config.jwt_issuer, config.jwt_expires_hours)
    }

    pub fn with_secret(secret: &str, issuer: &str, expires_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer: issuer.to_string(),
            expires_hours,
        }
    }

    /// Masa berlaku token dalam detik
    pub fn expires_in_seconds(&self) -> i64 {
        Duration::hours(self.expires_hours).num_seconds()
    }

    /// Generate JWT token untuk user login
    pub fn generate_token(&self, user_id: Uuid) -> AppResult<String> {
        self.generate_token_with_duration(user_id, Duration::hours(self.expires_hours))
    }

    /// Generate token dengan durasi custom
    pub fn generate_token_with_duration(&self, user_id: Uuid, duration: Duration) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + duration).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("token signing failed: {}", e)))
    }

    /// Verify JWT token dan cek expiration
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidToken
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => TokenError::Malformed,
                _ => TokenError::Invalid,
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "an-adequately-long-test-secret-value-0123";

    fn service() -> JwtService {
        JwtService::with_secret(SECRET, "restaurant-service", 24)
    }

    #[test]
    fn test_token_roundtrip_subject() {
        let jwt = service();
        let user_id = Uuid::new_v4();

        let token = jwt.generate_token(user_id).unwrap();
        let claims = jwt.verify_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.iss, "restaurant-service");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token() {
        let jwt = service();
        let token = jwt
            .generate_token_with_duration(Uuid::new_v4(), Duration::hours(-1))
            .unwrap();

        assert_eq!(jwt.verify_token(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_malformed_token() {
        assert_eq!(service().verify_token("not-a-jwt").unwrap_err(), TokenError::Malformed);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let other = JwtService::with_secret("another-adequately-long-secret-value-987", "restaurant-service", 24);
        let token = other.generate_token(Uuid::new_v4()).unwrap();

        assert_eq!(service().verify_token(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_wrong_issuer_is_invalid() {
        let other = JwtService::with_secret(SECRET, "someone-else", 24);
        let token = other.generate_token(Uuid::new_v4()).unwrap();

        assert_eq!(service().verify_token(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn test_expires_in_seconds() {
        assert_eq!(service().expires_in_seconds(), 86_400);
    }
}
