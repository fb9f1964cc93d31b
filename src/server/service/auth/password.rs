//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`) in `user.password_hash`.

use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a plaintext password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-format hash
/// - `Err(AppError::InternalErr(PasswordHash))` - Argon2 failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` / `Ok(false)` - Password matches or not
/// - `Err(AppError::InternalErr(PasswordHash))` - Stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Hash checked when the username is unknown, so both login failures pay for a
/// full Argon2 verification.
static UNKNOWN_USER_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("saferide-unknown-user").ok());

/// Runs a verification that always fails, costing the same as checking a real user.
pub fn verify_unknown_user(password: &str) {
    match UNKNOWN_USER_HASH.as_deref() {
        Some(hash) => {
            let _ = verify_password(password, hash);
        }
        None => tracing::warn!("Failed to prepare hash for unknown-user login checks"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_original_password() {
        let hash = hash_password("geheim123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("geheim123", &hash).unwrap());
        assert!(!verify_password("geheim124", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_different_salts() {
        let a = hash_password("geheim123").unwrap();
        let b = hash_password("geheim123").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_internal_error() {
        let result = verify_password("geheim123", "not-a-real-hash");

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::PasswordHash(_)))
        ));
    }

    #[test]
    fn unknown_user_check_uses_real_argon2_hash() {
        verify_unknown_user("geheim123");

        let hash = UNKNOWN_USER_HASH.as_deref().unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!verify_password("geheim123", hash).unwrap());
    }
}
