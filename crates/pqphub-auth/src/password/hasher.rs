//! Argon2id password hashing and verification.

use std::sync::OnceLock;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::warn;

use pqphub_core::error::AppError;

/// Hashes and verifies passwords with Argon2id at a fixed work factor.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    decoy_hash: OnceLock<String>,
}

impl PasswordHasher {
    /// Creates a hasher using the library's recommended parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
            decoy_hash: OnceLock::new(),
        }
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// A stored value that is not a valid PHC hash string never matches.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored password hash is unreadable");
                return Ok(false);
            }
        };

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Runs a full verification against a throwaway hash and reports no
    /// match. Used when there is no account, so the miss takes as long as
    /// a wrong password.
    pub fn verify_decoy(&self, password: &str) -> Result<bool, AppError> {
        let hash = match self.decoy_hash.get() {
            Some(hash) => hash,
            None => {
                let fresh = self.hash_password("pqphub-decoy-password")?;
                self.decoy_hash.get_or_init(|| fresh)
            }
        };
        self.verify_password(password, hash).map(|_| false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifies() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash_password("hunter22").unwrap();
        let b = hasher.hash_password("hunter22").unwrap();

        assert_ne!(a, b);
        assert!(!a.contains("hunter22"));
        assert!(hasher.verify_password("hunter22", &a).unwrap());
        assert!(!hasher.verify_password("hunter23", &a).unwrap());
    }

    #[test]
    fn decoy_never_matches() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify_decoy("pqphub-decoy-password").unwrap());
        assert!(!hasher.verify_decoy("anything").unwrap());
        assert!(hasher.decoy_hash.get().is_some_and(|h| h.starts_with("$argon2id$")));
    }

    #[test]
    fn unreadable_stored_hash_never_matches() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify_password("plain", "plain").unwrap());
    }
}
