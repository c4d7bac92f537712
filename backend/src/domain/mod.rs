//! Domain primitives, services and ports.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, plus the services that implement the driving ports.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User (alias to `user::User`): registered account.
//! - ExerciseEntry (alias to `exercise::ExerciseEntry`): one logged activity.

pub mod error;
pub mod exercise;
pub mod exercise_log_service;
pub mod log_query;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_accounts_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::exercise::{Description, ExerciseDuration, ExerciseEntry, ExerciseValidationError};
pub use self::exercise_log_service::ExerciseLogService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_accounts_service::UserAccountsService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use exercise_tracker::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such user"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
