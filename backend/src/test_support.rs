//! Test doubles shared by unit and integration tests.
//!
//! Enabled for this crate's own tests and, through the `test-support`
//! feature, for the `tests/` directory.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{AuditTrail, NewUser, User, UserChanges, UserId};

#[derive(Debug, Default)]
struct Store {
    next_row_id: i64,
    rows: Vec<User>,
}

/// In-memory [`UserRepository`] with the same live-row semantics as the
/// Diesel adapter: soft deletes, and email uniqueness among live users.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
    unavailable: bool,
}

impl InMemoryUserRepository {
    /// A repository whose every call fails with a connection error.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            store: Mutex::default(),
            unavailable: true,
        }
    }

    /// Number of stored rows, soft-deleted ones included.
    pub fn stored_rows(&self) -> usize {
        self.store.lock().map(|store| store.rows.len()).unwrap_or_default()
    }

    fn store(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        if self.unavailable {
            return Err(UserPersistenceError::connection("in-memory store offline"));
        }
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory store poisoned"))
    }
}

fn is_live(user: &User) -> bool {
    user.audit().deleted_at.is_none()
}

impl Store {
    fn live(&self, id: &UserId) -> Option<&User> {
        self.rows
            .iter()
            .find(|user| is_live(user) && user.id() == id)
    }

    fn live_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.rows
            .iter_mut()
            .find(|user| is_live(user) && user.id() == id)
    }

    fn email_taken(&self, email: &str, except: Option<&UserId>) -> bool {
        self.rows.iter().any(|user| {
            is_live(user) && user.email().as_ref() == email && Some(user.id()) != except
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.store()?;
        Ok(store.rows.iter().filter(|user| is_live(user)).cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.store()?;
        Ok(store.live(id).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut store = self.store()?;
        if store.email_taken(user.email.as_ref(), None) {
            return Err(UserPersistenceError::duplicate_email(user.email.as_ref()));
        }

        store.next_row_id += 1;
        let now = Utc::now();
        let stored = User::new(
            store.next_row_id,
            user.id,
            user.name.clone(),
            user.email.clone(),
            AuditTrail {
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
        );
        store.rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut store = self.store()?;
        if store.live(id).is_none() {
            return Ok(None);
        }
        if let Some(email) = &changes.email {
            if store.email_taken(email.as_ref(), Some(id)) {
                return Err(UserPersistenceError::duplicate_email(email.as_ref()));
            }
        }
        let Some(current) = store.live_mut(id) else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(current.clone()));
        }

        *current = User::new(
            current.row_id(),
            *current.id(),
            changes.name.clone().unwrap_or_else(|| current.name().clone()),
            changes.email.clone().unwrap_or_else(|| current.email().clone()),
            AuditTrail {
                updated_at: Utc::now(),
                ..*current.audit()
            },
        );
        Ok(Some(current.clone()))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut store = self.store()?;
        let Some(current) = store.live_mut(id) else {
            return Ok(false);
        };

        let now = Utc::now();
        *current = User::new(
            current.row_id(),
            *current.id(),
            current.name().clone(),
            current.email().clone(),
            AuditTrail {
                updated_at: now,
                deleted_at: Some(now),
                ..*current.audit()
            },
        );
        Ok(true)
    }
}
