use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;
use crate::role::Role;

/// Signed bearer token codec.
///
/// Issues and verifies JWTs carrying [`AccessClaims`], signed with a
/// process-wide secret using HS256. Issuer and verifier are the same
/// process, so symmetric signing is sufficient.
///
/// Verification order matters: the signature is checked before any claim
/// is inspected, and expiry is compared against this process's clock with
/// zero leeway.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Load the secret from configuration at startup; it must never appear
///   in logs, error messages, or token payloads
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec bound to a signing secret.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Verifier clock only, no grace window
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for a subject.
    ///
    /// Builds the claim set `{sub, role, iat = now, exp = now + ttl}` and
    /// signs it.
    ///
    /// # Errors
    /// * `SigningFailed` - serialization or signing failed
    pub fn issue(&self, subject: &str, role: Role, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: subject.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `Expired` - signature is valid but `exp` has passed
    /// * `Invalid` - malformed token, wrong signature, or unusable claims
    pub fn decode(&self, token: &str) -> Result<AccessClaims, TokenError> {
        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_decode() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue("user-1", Role::Customer, Duration::minutes(30))
            .expect("failed to issue token");
        let claims = codec.decode(&token).expect("failed to decode token");

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, Role::Customer);
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue("user-1", Role::Customer, Duration::seconds(-5))
            .unwrap();

        assert!(matches!(codec.decode(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_tampered_signature_is_invalid_not_expired() {
        let codec = TokenCodec::new(SECRET);

        // Expired AND tampered: the signature check must win
        let token = codec
            .issue("user-1", Role::Admin, Duration::seconds(-5))
            .unwrap();
        let mut tampered = token.into_bytes();
        let idx = tampered.len() - 5;
        tampered[idx] = if tampered[idx] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(matches!(
            codec.decode(&tampered),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let codec = TokenCodec::new(SECRET);
        let other = TokenCodec::new(b"another_secret_at_least_32_bytes!!");

        let token = codec
            .issue("user-1", Role::Customer, Duration::minutes(5))
            .unwrap();

        assert!(matches!(other.decode(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let codec = TokenCodec::new(SECRET);
        assert!(matches!(
            codec.decode("not.a.token"),
            Err(TokenError::Invalid(_))
        ));
    }
}
