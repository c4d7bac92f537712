//! PostgreSQL-backed `ExerciseRepository` implementation using Diesel ORM.
//!
//! Entries are read back ordered by their serial key, which preserves
//! insertion order independent of the logged date.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{Description, ExerciseDuration, ExerciseEntry, UserId};

use super::diesel_basic_error_mapping::{
    log_diesel_error, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

/// Diesel-backed implementation of the exercise repository port.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExercisePersistenceError {
    map_basic_pool_error(error, ExercisePersistenceError::connection)
}

fn map_diesel_error(error: DieselError) -> ExercisePersistenceError {
    map_basic_diesel_error(
        error,
        ExercisePersistenceError::query,
        ExercisePersistenceError::connection,
    )
}

/// A missing owner surfaces as a foreign key violation on insert.
fn map_insert_error(error: DieselError, user_id: &UserId) -> ExercisePersistenceError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            log_diesel_error(&error);
            ExercisePersistenceError::unknown_user(user_id.to_string())
        }
        other => map_diesel_error(other),
    }
}

fn row_to_entry(row: ExerciseRow) -> Result<ExerciseEntry, ExercisePersistenceError> {
    let corrupt = |err: crate::domain::ExerciseValidationError| {
        ExercisePersistenceError::query(format!("invalid stored exercise: {err}"))
    };
    let description = Description::new(row.description).map_err(corrupt)?;
    let duration = ExerciseDuration::new(i64::from(row.duration)).map_err(corrupt)?;
    Ok(ExerciseEntry::new(description, duration, row.date))
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn create(
        &self,
        user_id: &UserId,
        entry: &ExerciseEntry,
    ) -> Result<(), ExercisePersistenceError> {
        let duration = i32::try_from(entry.duration().minutes()).map_err(|_| {
            ExercisePersistenceError::query("duration exceeds storage range")
        })?;
        let row = NewExerciseRow {
            user_id: *user_id.as_uuid(),
            description: entry.description().as_ref(),
            duration,
            date: entry.date(),
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(exercises::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, user_id))?;
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ExerciseEntry>, ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ExerciseRow> = exercises::table
            .filter(exercises::user_id.eq(user_id.as_uuid()))
            .order(exercises::id.asc())
            .select(ExerciseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_entry).collect()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    fn foreign_key_violation_maps_to_unknown_user() {
        let user_id = UserId::random();
        let err = map_insert_error(
            DieselError::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation,
                Box::new("exercises_user_id_fkey".to_owned()),
            ),
            &user_id,
        );
        assert_eq!(
            err,
            ExercisePersistenceError::unknown_user(user_id.to_string())
        );
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let err = map_insert_error(
            DieselError::DatabaseError(
                DatabaseErrorKind::ClosedConnection,
                Box::new("closed".to_owned()),
            ),
            &UserId::random(),
        );
        assert!(matches!(err, ExercisePersistenceError::Connection { .. }));
    }

    #[rstest]
    #[case(0)]
    #[case(-10)]
    fn non_positive_stored_durations_are_query_errors(#[case] duration: i32) {
        let err = row_to_entry(ExerciseRow {
            description: "swim".to_owned(),
            duration,
            date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
        })
        .expect_err("corrupt duration");
        assert!(matches!(err, ExercisePersistenceError::Query { .. }));
    }

    #[rstest]
    fn rows_convert_to_entries() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 15).expect("valid date");
        let entry = row_to_entry(ExerciseRow {
            description: "swim".to_owned(),
            duration: 40,
            date,
        })
        .expect("valid row");
        assert_eq!(entry.description().as_ref(), "swim");
        assert_eq!(entry.duration().minutes(), 40);
        assert_eq!(entry.date(), date);
    }
}
