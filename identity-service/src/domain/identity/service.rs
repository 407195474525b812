use std::sync::Arc;

use async_trait::async_trait;
use auth::CredentialHasher;
use auth::Role;
use auth::TokenCodec;
use chrono::Duration;
use chrono::Utc;

use crate::config::Config;
use crate::config::PasswordPolicy;
use crate::identity::errors::IdentityError;
use crate::identity::errors::ValidationError;
use crate::identity::models::EmailAddress;
use crate::identity::models::RegisterUserCommand;
use crate::identity::models::User;
use crate::identity::models::UserId;
use crate::identity::models::UserRecord;
use crate::identity::ports::IdentityPort;
use crate::identity::ports::UserDirectory;

/// Identity service implementation.
///
/// Orchestrates the credential hasher, token codec, and user directory
/// behind [`IdentityPort`]. Stateless per call: the only shared state is
/// the directory and the read-only configuration captured at
/// construction, so every operation is safe to call concurrently.
pub struct IdentityService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    hasher: CredentialHasher,
    codec: TokenCodec,
    policy: PasswordPolicy,
    token_ttl: Duration,
}

impl<D> IdentityService<D>
where
    D: UserDirectory,
{
    /// Create the service from a directory adapter and loaded config.
    ///
    /// The signing secret and policy are captured here, once; nothing
    /// mutates them for the process lifetime.
    pub fn new(directory: Arc<D>, config: &Config) -> Self {
        Self {
            directory,
            hasher: CredentialHasher::new(),
            codec: TokenCodec::new(config.auth.secret.as_bytes()),
            policy: config.password.clone(),
            token_ttl: Duration::minutes(config.auth.token_ttl_minutes),
        }
    }

    /// Decode a token and re-fetch the active user it names.
    ///
    /// Every rejection collapses into `Unauthenticated`; the distinction
    /// between expired, forged, and dangling-subject tokens exists only
    /// in the logs.
    async fn resolve_token(&self, token: &str) -> Result<User, IdentityError> {
        let claims = self.codec.decode(token).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            IdentityError::Unauthenticated
        })?;

        let user_id =
            UserId::from_string(&claims.sub).map_err(|_| IdentityError::Unauthenticated)?;

        let user = self
            .directory
            .find_by_id(&user_id)
            .await?
            .ok_or(IdentityError::Unauthenticated)?;

        if !user.is_active {
            tracing::debug!(user_id = %user.id, "Token for deactivated user rejected");
            return Err(IdentityError::Unauthenticated);
        }

        Ok(user)
    }
}

#[async_trait]
impl<D> IdentityPort for IdentityService<D>
where
    D: UserDirectory,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserRecord, IdentityError> {
        let email = EmailAddress::new(&command.email).map_err(ValidationError::from)?;
        self.policy
            .check(&command.password)
            .map_err(ValidationError::from)?;
        if command.password != command.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        let password_hash = self
            .hasher
            .hash(&command.password)
            .map_err(|e| IdentityError::Credential(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            email,
            password_hash,
            first_name: command.first_name,
            last_name: command.last_name,
            role: command.role,
            phone: command.phone,
            is_active: true,
            created_at: Utc::now(),
            last_login: None,
        };

        let created = self.directory.insert(user).await?;
        tracing::info!(user_id = %created.id, role = %created.role, "User registered");

        Ok(UserRecord::from(&created))
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, IdentityError> {
        // A malformed email cannot match any record; fold it into the
        // same outcome as an unknown one.
        let email = EmailAddress::new(email).map_err(|_| IdentityError::InvalidCredentials)?;

        let user = self
            .directory
            .find_by_email(&email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        if !user.is_active {
            tracing::debug!(user_id = %user.id, "Login attempt for deactivated user");
            return Err(IdentityError::InvalidCredentials);
        }

        let password_matches = self
            .hasher
            .verify(password, &user.password_hash)
            .map_err(|e| IdentityError::Credential(e.to_string()))?;
        if !password_matches {
            return Err(IdentityError::InvalidCredentials);
        }

        let token = self
            .codec
            .issue(&user.id.to_string(), user.role, self.token_ttl)
            .map_err(|e| IdentityError::Token(e.to_string()))?;

        // Best-effort: a failed stamp must not fail the login
        if let Err(e) = self.directory.record_login(&user.id, Utc::now()).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to record last login");
        }

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(token)
    }

    async fn current_user(&self, token: &str) -> Result<UserRecord, IdentityError> {
        let user = self.resolve_token(token).await?;
        Ok(UserRecord::from(&user))
    }

    async fn logout(&self, token: &str) -> Result<(), IdentityError> {
        // Tokens are self-contained and not revoked server-side; the
        // client discards its copy. Decode only to attribute the log.
        match self.codec.decode(token) {
            Ok(claims) => tracing::info!(user_id = %claims.sub, "User logged out"),
            Err(e) => tracing::debug!(error = %e, "Logout with unusable token"),
        }
        Ok(())
    }

    async fn authorize(
        &self,
        token: &str,
        required_roles: &[Role],
    ) -> Result<UserRecord, IdentityError> {
        let user = self.resolve_token(token).await?;

        if !required_roles.contains(&user.role) {
            tracing::debug!(
                user_id = %user.id,
                role = %user.role,
                "Role not in required set"
            );
            return Err(IdentityError::Forbidden);
        }

        Ok(UserRecord::from(&user))
    }
}
