//! Driving port for the user CRUD use-cases.
//!
//! Inbound adapters depend on [`UserDirectory`] rather than on the repository
//! so HTTP handlers never see persistence errors directly.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error, UserChanges, UserId, UserName, UserResponse};

/// Validated input for the create use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// Requested user name.
    pub name: UserName,
    /// Requested email address.
    pub email: EmailAddress,
}

/// Domain use-case port for managing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// List every live user.
    async fn list_users(&self) -> Result<Vec<UserResponse>, Error>;

    /// Fetch a single user, failing with `not_found` when absent.
    async fn get_user(&self, id: &UserId) -> Result<UserResponse, Error>;

    /// Create a user with a freshly generated identifier.
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, Error>;

    /// Merge `changes` into an existing user.
    async fn update_user(&self, id: &UserId, changes: UserChanges) -> Result<UserResponse, Error>;

    /// Soft-delete a user, failing with `not_found` when absent.
    async fn delete_user(&self, id: &UserId) -> Result<(), Error>;
}
