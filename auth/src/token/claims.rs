use serde::Deserialize;
use serde::Serialize;

use crate::role::Role;

/// Claim set carried by an access token.
///
/// Fixed on purpose: the identity core issues exactly these claims and
/// nothing else, so a token cannot smuggle fields the verifier does not
/// understand. Trust the contents only after signature verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject: the user's opaque identifier
    pub sub: String,

    /// Role the subject held when the token was issued
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}
