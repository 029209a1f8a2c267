// /restaurant/services/restaurant-service/src/core/security.rs

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::utils::{AppError, AppResult};

/// Layanan keamanan untuk handling password
pub struct SecurityService {
    argon2: Argon2<'static>,
    pepper: Vec<u8>,
}

impl SecurityService {
    /// Membuat instance baru SecurityService
    pub fn new(pepper: &[u8]) -> Self {
        Self {
            argon2: Argon2::default(),
            pepper: pepper.to_vec(),
        }
    }

    fn peppered(&self, password: &str) -> Vec<u8> {
        let mut bytes = password.as_bytes().to_vec();
        bytes.extend_from_slice(&self.pepper);
        bytes
    }

    /// Hash password dengan pepper
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(&self.peppered(password), &salt)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?;

        Ok(password_hash.to_string())
    }

    /// Verifikasi password, hash yang rusak dianggap tidak cocok
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                return false;
            }
        };

        self.argon2
            .verify_password(&self.peppered(password), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let security = SecurityService::new(b"pepper");
        let hash = security.hash_password("correct-horse").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(security.verify_password("correct-horse", &hash));
        assert!(!security.verify_password("wrong-horse", &hash));
    }

    #[test]
    fn test_pepper_is_part_of_the_hash() {
        let hash = SecurityService::new(b"pepper-a").hash_password("correct-horse").unwrap();
        assert!(!SecurityService::new(b"pepper-b").verify_password("correct-horse", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let security = SecurityService::new(b"pepper");
        let first = security.hash_password("correct-horse").unwrap();
        let second = security.hash_password("correct-horse").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_never_matches() {
        assert!(!SecurityService::new(b"pepper").verify_password("anything", "not-a-hash"));
    }
}
