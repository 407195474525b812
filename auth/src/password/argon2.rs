use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::CredentialError;

/// Credential hasher backed by Argon2id.
///
/// Every call to [`hash`](CredentialHasher::hash) draws a fresh salt from
/// the OS entropy source, so hashing the same password twice yields two
/// different PHC strings. Verification parses the salt and parameters
/// back out of the stored string; the final digest comparison inside the
/// `argon2` crate is constant-time.
pub struct CredentialHasher;

impl CredentialHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string (algorithm, parameters, salt, and digest in one value)
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing primitive itself failed. This is a
    ///   fatal condition for the caller; there is no weaker fallback.
    pub fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored PHC string.
    ///
    /// # Returns
    /// `Ok(true)` on a match, `Ok(false)` on a mismatch
    ///
    /// # Errors
    /// * `MalformedHash` - the stored value is not a parseable PHC string
    pub fn verify(&self, password: &str, stored: &str) -> Result<bool, CredentialError> {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| CredentialError::MalformedHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}
