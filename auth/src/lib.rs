//! Authentication primitives for the identity core
//!
//! Provides the security-sensitive building blocks the identity service
//! orchestrates:
//! - Credential hashing (Argon2id, salted per call)
//! - Signed bearer tokens (JWT, HS256) with a fixed claim set
//! - The closed role set used for authorization decisions
//!
//! The identity domain lives elsewhere; this crate deliberately knows
//! nothing about users, storage, or transports.
//!
//! # Examples
//!
//! ## Credential hashing
//! ```
//! use auth::CredentialHasher;
//!
//! let hasher = CredentialHasher::new();
//! let stored = hasher.hash("hunter2!A").unwrap();
//! assert!(hasher.verify("hunter2!A", &stored).unwrap());
//! assert!(!hasher.verify("hunter3!A", &stored).unwrap());
//! ```
//!
//! ## Bearer tokens
//! ```
//! use auth::{Role, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("user-1", Role::Customer, Duration::minutes(30)).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "user-1");
//! assert_eq!(claims.role, Role::Customer);
//! ```

pub mod password;
pub mod role;
pub mod token;

// Re-export commonly used items
pub use password::CredentialError;
pub use password::CredentialHasher;
pub use role::Role;
pub use role::RoleParseError;
pub use token::AccessClaims;
pub use token::TokenCodec;
pub use token::TokenError;
