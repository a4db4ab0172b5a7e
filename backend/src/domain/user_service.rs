//! User directory domain service.
//!
//! Implements the [`UserDirectory`] driving port on top of any
//! [`UserRepository`], translating persistence failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, warn};

use crate::domain::ports::{
    CreateUserRequest, UserDirectory, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, NewUser, UserChanges, UserId, UserResponse};

/// User service implementing the driving port.
#[derive(Clone)]
pub struct UserService<R> {
    repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn user_not_found(id: &UserId) -> Error {
    Error::not_found(format!("user {id} not found")).with_details(json!({ "id": id.to_string() }))
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Connection { message } => {
            warn!(reason = %message, "user repository unavailable");
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            error!(reason = %message, "user repository query failed");
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { email } => {
            Error::conflict("email is already registered").with_details(json!({
                "field": "email",
                "value": email,
                "code": "duplicate_email",
            }))
        }
    }
}

#[async_trait]
impl<R> UserDirectory for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<UserResponse>, Error> {
        let users = self.repo.list().await.map_err(map_persistence_error)?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_user(&self, id: &UserId) -> Result<UserResponse, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .map(UserResponse::from)
            .ok_or_else(|| user_not_found(id))
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, Error> {
        let CreateUserRequest { name, email } = request;
        let new_user = NewUser {
            id: UserId::random(),
            name,
            email,
        };
        let user = self
            .repo
            .create(&new_user)
            .await
            .map_err(map_persistence_error)?;
        Ok(user.into())
    }

    async fn update_user(&self, id: &UserId, changes: UserChanges) -> Result<UserResponse, Error> {
        self.repo
            .update(id, &changes)
            .await
            .map_err(map_persistence_error)?
            .map(UserResponse::from)
            .ok_or_else(|| user_not_found(id))
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), Error> {
        let deleted = self.repo.delete(id).await.map_err(map_persistence_error)?;
        if deleted {
            Ok(())
        } else {
            Err(user_not_found(id))
        }
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
