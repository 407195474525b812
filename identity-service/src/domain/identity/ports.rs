use async_trait::async_trait;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;

use crate::identity::errors::DirectoryError;
use crate::identity::errors::IdentityError;
use crate::identity::models::EmailAddress;
use crate::identity::models::RegisterUserCommand;
use crate::identity::models::User;
use crate::identity::models::UserId;
use crate::identity::models::UserRecord;

/// Port for the identity operations a transport layer may call.
///
/// These five operations are the entire entry surface of the core;
/// routing, schema validation, and status-code mapping live outside.
#[async_trait]
pub trait IdentityPort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// Validates the command (email shape, password policy, confirmation
    /// match), hashes the password, and persists the record with
    /// `is_active = true`.
    ///
    /// # Returns
    /// The created record, credential hash stripped
    ///
    /// # Errors
    /// * `Validation` - malformed email, weak password, or mismatch
    /// * `DuplicateEmail` - email is already registered
    async fn register(&self, command: RegisterUserCommand) -> Result<UserRecord, IdentityError>;

    /// Authenticate by email and password, issuing a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown email, deactivated account, or
    ///   wrong password; the three are deliberately indistinguishable
    async fn login(&self, email: &str, password: &str) -> Result<String, IdentityError>;

    /// Resolve the user a token belongs to.
    ///
    /// The record is re-fetched from the directory by the token subject,
    /// so a deactivation or role change after issuance takes effect.
    ///
    /// # Errors
    /// * `Unauthenticated` - missing, malformed, forged, or expired
    ///   token, or the subject no longer resolves to an active user
    async fn current_user(&self, token: &str) -> Result<UserRecord, IdentityError>;

    /// Log out.
    ///
    /// Tokens are self-contained and not revoked server-side, so this is
    /// a no-op success: the client is responsible for discarding its
    /// copy. Kept as an explicit operation so the contract is documented
    /// rather than silently assumed.
    async fn logout(&self, token: &str) -> Result<(), IdentityError>;

    /// Authorize a token against a required role set.
    ///
    /// Plain set membership on the re-fetched user's role; no hierarchy
    /// between roles.
    ///
    /// # Errors
    /// * `Unauthenticated` - token does not resolve to an active user
    /// * `Forbidden` - valid identity, role not in `required_roles`
    async fn authorize(
        &self,
        token: &str,
        required_roles: &[Role],
    ) -> Result<UserRecord, IdentityError>;
}

/// Persistence port for user records.
///
/// The storage engine behind it is an external collaborator; the core
/// only requires these lookups plus an atomic uniqueness guarantee on
/// the normalized email.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness must be atomic: of two concurrent inserts with the
    /// same email, exactly one succeeds and the other fails with
    /// `DuplicateEmail`.
    ///
    /// # Errors
    /// * `DuplicateEmail` - a record with this email already exists
    /// * `Unavailable` - storage operation failed
    async fn insert(&self, user: User) -> Result<User, DirectoryError>;

    /// Retrieve a user by normalized email.
    ///
    /// # Errors
    /// * `Unavailable` - storage operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DirectoryError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `Unavailable` - storage operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DirectoryError>;

    /// Stamp the last successful login time.
    ///
    /// Best-effort from the caller's perspective; a missing user is a
    /// silent no-op.
    ///
    /// # Errors
    /// * `Unavailable` - storage operation failed
    async fn record_login(&self, id: &UserId, at: DateTime<Utc>) -> Result<(), DirectoryError>;
}
