//! Exercise log domain service.
//!
//! Adds entries to a user's history and answers filtered log queries. The
//! filtering itself lives in [`crate::domain::log_query`]; this service only
//! resolves the owner and loads their history.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::log_query::LogCriteria;
use crate::domain::ports::{
    AddExerciseRequest, AddExerciseResponse, ExerciseCommand, ExerciseLogQuery,
    ExerciseLogRequest, ExerciseLogResponse, ExercisePersistenceError, ExerciseRepository,
    UserRepository,
};
use crate::domain::user_accounts_service::map_user_persistence_error;
use crate::domain::{Description, Error, ExerciseDuration, ExerciseEntry, User, UserId};

fn map_exercise_persistence_error(error: ExercisePersistenceError) -> Error {
    match error {
        ExercisePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("exercise repository unavailable: {message}"))
        }
        ExercisePersistenceError::Query { message } => {
            Error::internal(format!("exercise repository error: {message}"))
        }
        ExercisePersistenceError::UnknownUser { user_id } => unknown_user(&user_id),
    }
}

fn unknown_user(user_id: &dyn std::fmt::Display) -> Error {
    Error::not_found(format!("user {user_id} not found"))
}

/// Service implementing [`ExerciseCommand`] and [`ExerciseLogQuery`].
#[derive(Clone)]
pub struct ExerciseLogService<U, E> {
    user_repo: Arc<U>,
    exercise_repo: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseLogService<U, E> {
    /// Create a service over the user and exercise repositories.
    ///
    /// `clock` supplies the default date for entries submitted without one.
    pub fn new(user_repo: Arc<U>, exercise_repo: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            exercise_repo,
            clock,
        }
    }
}

impl<U, E> ExerciseLogService<U, E>
where
    U: UserRepository,
{
    async fn require_user(&self, user_id: &UserId) -> Result<User, Error> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| unknown_user(user_id))
    }
}

#[async_trait]
impl<U, E> ExerciseCommand for ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn add_exercise(
        &self,
        request: AddExerciseRequest,
    ) -> Result<AddExerciseResponse, Error> {
        let description = Description::new(request.description)
            .map_err(|err| Error::invalid_request(format!("invalid description: {err}")))?;
        let duration = ExerciseDuration::new(request.duration)
            .map_err(|err| Error::invalid_request(format!("invalid duration: {err}")))?;
        let user = self.require_user(&request.user_id).await?;

        let date = request
            .date
            .unwrap_or_else(|| self.clock.utc().date_naive());
        let entry = ExerciseEntry::new(description, duration, date);

        self.exercise_repo
            .create(user.id(), &entry)
            .await
            .map_err(map_exercise_persistence_error)?;

        info!(user_id = %user.id(), date = %entry.date(), "logged exercise");
        Ok(AddExerciseResponse { user, entry })
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn query_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLogResponse, Error> {
        let user = self.require_user(&request.user_id).await?;
        let history = self
            .exercise_repo
            .list_for_user(user.id())
            .await
            .map_err(map_exercise_persistence_error)?;

        let criteria = LogCriteria::from_raw(
            request.from.as_deref(),
            request.to.as_deref(),
            request.limit.as_deref(),
        );
        let entries = criteria.apply(&history);

        Ok(ExerciseLogResponse {
            user,
            criteria,
            entries,
        })
    }
}

#[cfg(test)]
#[path = "exercise_log_service_tests.rs"]
mod tests;
