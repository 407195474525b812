use thiserror::Error;

/// Error type for token operations.
///
/// `Expired` and `Invalid` are distinct so callers can log them
/// differently, but both must surface to the end user as "not
/// authenticated". None of these messages ever carry the signing secret.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}
