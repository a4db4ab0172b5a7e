//! Driven port for user persistence adapters and their errors.
//!
//! Every read and write only sees live rows: a soft-deleted user is
//! indistinguishable from one that never existed.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserChanges, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another live user already holds the email address.
        DuplicateEmail { email: String } => "email already registered: {email}",
    }
}

/// Storage contract for the `users` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every live user in storage order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a live user by external identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user and return the stored row.
    ///
    /// Fails with [`UserPersistenceError::DuplicateEmail`] when the email is
    /// already held by a live user.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Apply `changes` to a live user, returning `None` when no such user
    /// exists. An empty change set returns the current row unchanged.
    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Soft-delete a live user. Returns `false` when nothing was deleted.
    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError>;
}
