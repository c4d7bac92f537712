//! Driving port for logging exercises against a user.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Error, ExerciseEntry, User, UserId};

/// Request to append an exercise to a user's history.
///
/// `description` and `duration` arrive unvalidated; `date` has already been
/// parsed by the inbound adapter and `None` means "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseRequest {
    pub user_id: UserId,
    pub description: String,
    pub duration: i64,
    pub date: Option<NaiveDate>,
}

/// The stored entry together with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseResponse {
    pub user: User,
    pub entry: ExerciseEntry,
}

/// Driving port for exercise write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseCommand: Send + Sync {
    /// Validate and store a new entry.
    ///
    /// Returns `not_found` when the user does not exist and
    /// `invalid_request` when the description or duration is rejected.
    async fn add_exercise(&self, request: AddExerciseRequest)
    -> Result<AddExerciseResponse, Error>;
}
