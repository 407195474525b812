use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Malformed registration input, correctable by the caller
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Weak password: {0}")]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Error for user directory operations
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("User directory unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for all identity operations.
///
/// The first five variants are the expected, recoverable outcomes a
/// transport layer translates into client-facing responses. Their
/// messages are stable and carry no internal detail. In particular,
/// `InvalidCredentials` is a single variant so that unknown email,
/// deactivated account, and wrong password are externally
/// indistinguishable.
///
/// The remaining variants are internal failures: the detail string is
/// for logs and is deliberately excluded from the displayed message.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Insufficient permissions")]
    Forbidden,

    #[error("User directory unavailable")]
    Directory(String),

    #[error("Credential hashing failed")]
    Credential(String),

    #[error("Token issuance failed")]
    Token(String),

    #[error("Internal error")]
    Internal(String),
}

impl From<DirectoryError> for IdentityError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::DuplicateEmail => IdentityError::DuplicateEmail,
            DirectoryError::Unavailable(detail) => IdentityError::Directory(detail),
        }
    }
}

impl From<anyhow::Error> for IdentityError {
    fn from(err: anyhow::Error) -> Self {
        IdentityError::Internal(err.to_string())
    }
}
