//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    ExerciseCommand, ExerciseLogQuery, ExerciseRepository, UserRepository, UsersCommand,
    UsersQuery,
};
use crate::domain::{ExerciseLogService, UserAccountsService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub exercises: Arc<dyn ExerciseCommand>,
    pub exercise_log: Arc<dyn ExerciseLogQuery>,
}

impl HttpState {
    /// Construct state from the four driving ports.
    pub fn new(
        users: Arc<dyn UsersCommand>,
        users_query: Arc<dyn UsersQuery>,
        exercises: Arc<dyn ExerciseCommand>,
        exercise_log: Arc<dyn ExerciseLogQuery>,
    ) -> Self {
        Self {
            users,
            users_query,
            exercises,
            exercise_log,
        }
    }

    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use exercise_tracker::inbound::http::state::HttpState;
    /// use exercise_tracker::outbound::memory::MemoryStore;
    ///
    /// let store = Arc::new(MemoryStore::new());
    /// let state = HttpState::from_repositories(
    ///     Arc::clone(&store),
    ///     store,
    ///     Arc::new(mockable::DefaultClock),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn from_repositories<U, E>(
        user_repo: Arc<U>,
        exercise_repo: Arc<E>,
        clock: Arc<dyn Clock>,
    ) -> Self
    where
        U: UserRepository + 'static,
        E: ExerciseRepository + 'static,
    {
        let accounts = Arc::new(UserAccountsService::new(Arc::clone(&user_repo)));
        let log = Arc::new(ExerciseLogService::new(user_repo, exercise_repo, clock));
        Self::new(accounts.clone(), accounts, log.clone(), log)
    }
}
