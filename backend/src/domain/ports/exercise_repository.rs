//! Port for exercise entry persistence.
//!
//! Entries live in their own collection and reference their owner by
//! [`UserId`]; adapters return a user's history in insertion order.

use async_trait::async_trait;

use crate::domain::{ExerciseEntry, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by exercise repository adapters.
    pub enum ExercisePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "exercise repository query failed: {message}",
        /// The referenced owner does not exist.
        UnknownUser { user_id: String } =>
            "no user with id {user_id}",
    }
}

/// Driven port for storing and reading exercise entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Append an entry to the owner's history.
    async fn create(
        &self,
        user_id: &UserId,
        entry: &ExerciseEntry,
    ) -> Result<(), ExercisePersistenceError>;

    /// Read the owner's full history in insertion order.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ExerciseEntry>, ExercisePersistenceError>;
}
