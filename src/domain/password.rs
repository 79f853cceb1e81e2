//! Staff password value object.
//!
//! Wraps an Argon2id PHC string. Plain text never leaves this module.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Well-formed hash that matches no password. Verified against when the
/// email is unknown so both signin failure paths cost one Argon2 run.
const UNKNOWN_USER_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c2lnbmluLWR1bW15LXNhbHQ$3rYdcs1wQ3sU3u7fRqvT1zVnq3m6cXv8z5JkI8d2H0E";

/// Hashed password as stored in `users.password_hash`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with a fresh salt.
    ///
    /// # Errors
    /// Returns a validation error if the password is shorter than
    /// `MIN_PASSWORD_LENGTH` characters.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH as usize {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Wrap a hash loaded from the database.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Stand-in used by signin when no user matches the email.
    pub fn unknown_user() -> Self {
        Self::from_hash(UNKNOWN_USER_HASH)
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Check a plain text password. Malformed hashes never verify.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = Password::new("front-desk-1").unwrap();

        assert!(password.verify("front-desk-1"));
        assert!(!password.verify("front-desk-2"));
    }

    #[test]
    fn test_restored_hash_still_verifies() {
        let stored = Password::new("clinic-pass").unwrap().into_string();

        assert!(Password::from_hash(stored).verify("clinic-pass"));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let first = Password::new("SamePassword123").unwrap();
        let second = Password::new("SamePassword123").unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify("SamePassword123"));
        assert!(second.verify("SamePassword123"));
    }

    #[test]
    fn test_too_short_is_rejected() {
        assert!(matches!(Password::new("short"), Err(AppError::Validation(_))));
        assert!(Password::new("12345678").is_ok());
    }

    #[test]
    fn test_unknown_user_hash_matches_nothing() {
        let dummy = Password::unknown_user();
        assert!(!dummy.verify(""));
        assert!(!dummy.verify("password123"));
    }

    #[test]
    fn test_debug_hides_hash() {
        let password = Password::new("front-desk-1").unwrap();
        assert!(!format!("{:?}", password).contains("argon2"));
    }
}
