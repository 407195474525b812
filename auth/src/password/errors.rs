use thiserror::Error;

/// Error type for credential hashing operations.
///
/// `MalformedHash` means the stored value could not be parsed as a PHC
/// string at all; a plain wrong password is not an error, `verify`
/// reports it as `Ok(false)`.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored credential hash is malformed: {0}")]
    MalformedHash(String),
}
