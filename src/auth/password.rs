//! # Password hashing and verification (Argon2id)
//!
//! - [`hash_password`] salts with [`OsRng`] and hashes with the default
//!   Argon2id parameters, returning a PHC-format string
//!   (`$argon2id$v=19$m=19456,t=2,p=1$...`).
//! - [`verify_password`] parses a stored PHC string and checks a candidate.
//!
//! Both are CPU-bound; callers run them on the blocking pool.

use crate::error::{AppError, AppResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(format!("Failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
///
/// `Ok(false)` means the password is wrong; `Err` means the stored hash is
/// malformed.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::PasswordHash(format!("Invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_never_the_plaintext() {
        for password in ["pw1", "correct horse battery staple", "a"] {
            let hash = hash_password(password).unwrap();
            assert_ne!(hash, password);
            assert!(hash.starts_with("$argon2id$"));
        }
    }

    #[test]
    fn same_password_gets_a_fresh_salt() {
        assert_ne!(hash_password("pw1").unwrap(), hash_password("pw1").unwrap());
    }

    #[test]
    fn verify_accepts_only_the_original() {
        let hash = hash_password("pw1").unwrap();
        assert!(verify_password("pw1", &hash).unwrap());
        assert!(!verify_password("pw2", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(matches!(
            verify_password("pw1", "not-a-phc-string"),
            Err(AppError::PasswordHash(_))
        ));
    }
}
