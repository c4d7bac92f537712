//! Driving port for reading a user's filtered exercise log.

use async_trait::async_trait;

use crate::domain::log_query::LogCriteria;
use crate::domain::{Error, ExerciseEntry, User, UserId};

/// Raw log query parameters.
///
/// Filter values are kept as submitted; malformed values widen the query
/// rather than failing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    pub user_id: UserId,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Filtered log for a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogResponse {
    pub user: User,
    /// Criteria after normalisation, echoed back to callers.
    pub criteria: LogCriteria,
    pub entries: Vec<ExerciseEntry>,
}

impl ExerciseLogResponse {
    /// Number of entries in the filtered, truncated log.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Driving port for exercise log reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Resolve the user and return the matching slice of their history.
    async fn query_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLogResponse, Error>;
}
