//! Driving port for user registration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, User};

/// Request to register a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// Raw username as submitted; validated by the implementation.
    pub username: String,
}

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user under a fresh identifier.
    ///
    /// Fails with `invalid_request` when the username is blank or too long
    /// and with `conflict` when it is already taken.
    async fn register_user(&self, request: RegisterUserRequest) -> Result<User, Error>;
}
