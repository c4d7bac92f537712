//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the repository ports backed by PostgreSQL via
//! Diesel with async support through `diesel-async` and `bb8` connection
//! pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: Diesel and pool failures map onto the port
//!   error enums.
//!
//! # Example
//!
//! ```no_run
//! use exercise_tracker::outbound::persistence::{
//!     DbPool, DieselExerciseRepository, DieselUserRepository, PoolConfig, PoolError,
//! };
//!
//! # async fn example() -> Result<(), PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/exercise")).await?;
//! let users = DieselUserRepository::new(pool.clone());
//! let exercises = DieselExerciseRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_exercise_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_exercise_repository::DieselExerciseRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_POOL_MAX_SIZE, DbPool, PoolConfig, PoolError};
