//! User account domain service.
//!
//! Implements registration and listing over a [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    RegisterUserRequest, UserPersistenceError, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{Error, User, Username};

/// Map user repository failures onto API errors.
pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateUsername { username } => {
            Error::conflict(format!("username {username} is already taken"))
        }
    }
}

/// Service implementing [`UsersCommand`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UserAccountsService<U> {
    user_repo: Arc<U>,
}

impl<U> UserAccountsService<U> {
    /// Create a service backed by the given user repository.
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UsersCommand for UserAccountsService<U>
where
    U: UserRepository,
{
    async fn register_user(&self, request: RegisterUserRequest) -> Result<User, Error> {
        let username = Username::new(request.username)
            .map_err(|err| Error::invalid_request(format!("invalid username: {err}")))?;
        let user = User::register(username);

        self.user_repo
            .create(&user)
            .await
            .map_err(map_user_persistence_error)?;

        info!(user_id = %user.id(), username = %user.username(), "registered user");
        Ok(user)
    }
}

#[async_trait]
impl<U> UsersQuery for UserAccountsService<U>
where
    U: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo
            .list_all()
            .await
            .map_err(map_user_persistence_error)
    }
}

#[cfg(test)]
#[path = "user_accounts_service_tests.rs"]
mod tests;
