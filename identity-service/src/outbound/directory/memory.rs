use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::identity::errors::DirectoryError;
use crate::identity::models::EmailAddress;
use crate::identity::models::User;
use crate::identity::models::UserId;
use crate::identity::ports::UserDirectory;

/// In-memory user directory.
///
/// Reference adapter for tests and local runs; durable engines implement
/// [`UserDirectory`] elsewhere. Both indexes live under one lock, so the
/// existence check and the insert in [`insert`](UserDirectory::insert)
/// are a single atomic step: two concurrent registrations of the same
/// email produce exactly one success.
pub struct InMemoryUserDirectory {
    state: RwLock<DirectoryState>,
}

#[derive(Default)]
struct DirectoryState {
    users_by_id: HashMap<Uuid, User>,
    id_by_email: HashMap<String, Uuid>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(DirectoryState::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, DirectoryState>, DirectoryError> {
        self.state
            .read()
            .map_err(|_| DirectoryError::Unavailable("directory lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, DirectoryState>, DirectoryError> {
        self.state
            .write()
            .map_err(|_| DirectoryError::Unavailable("directory lock poisoned".to_string()))
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn insert(&self, user: User) -> Result<User, DirectoryError> {
        let mut state = self.write()?;

        if state.id_by_email.contains_key(user.email.as_str()) {
            return Err(DirectoryError::DuplicateEmail);
        }

        state
            .id_by_email
            .insert(user.email.as_str().to_string(), user.id.0);
        state.users_by_id.insert(user.id.0, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DirectoryError> {
        let state = self.read()?;

        Ok(state
            .id_by_email
            .get(email.as_str())
            .and_then(|id| state.users_by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DirectoryError> {
        let state = self.read()?;
        Ok(state.users_by_id.get(&id.0).cloned())
    }

    async fn record_login(&self, id: &UserId, at: DateTime<Utc>) -> Result<(), DirectoryError> {
        let mut state = self.write()?;

        // Missing user is a no-op: the stamp is best-effort
        if let Some(user) = state.users_by_id.get_mut(&id.0) {
            user.last_login = Some(at);
        }

        Ok(())
    }
}
