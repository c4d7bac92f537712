//! Exercise logging and log query handlers.
//!
//! ```text
//! POST /api/exercise/add {"userId":"<uuid>","description":"run","duration":30,"date":"2020-01-01"}
//! GET /api/exercise/log?userId=<uuid>&from=2020-01-01&to=2020-12-31&limit=5
//! ```
//!
//! Dates in responses use the long human form, for example `Wed Jan 01 2020`.

use actix_web::{get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ExerciseEntry;
use crate::domain::log_query::DATE_FORMAT;
use crate::domain::ports::{
    AddExerciseRequest, AddExerciseResponse, ExerciseLogRequest, ExerciseLogResponse,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::{JsonOrForm, QueryPairs, first_value, into_body};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, NumberOrText, parse_optional_date, parse_user_id, parse_whole_number, require,
};

/// Display format for entry dates in responses.
pub const RESPONSE_DATE_FORMAT: &str = "%a %b %d %Y";

fn display_date(date: NaiveDate) -> String {
    date.format(RESPONSE_DATE_FORMAT).to_string()
}

/// Body for `POST /api/exercise/add`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddExerciseRequestBody {
    #[schema(format = "uuid")]
    pub user_id: Option<String>,
    #[schema(example = "morning run")]
    pub description: Option<String>,
    /// Whole minutes, as a number or numeric string.
    #[schema(value_type = Option<i64>, example = 30)]
    pub duration: Option<NumberOrText>,
    /// `YYYY-MM-DD`; defaults to today when absent or blank.
    #[schema(format = "date", example = "2020-01-01")]
    pub date: Option<String>,
}

/// Stored exercise echoed back with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddExerciseResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: u32,
    #[schema(example = "Wed Jan 01 2020")]
    pub date: String,
}

impl From<AddExerciseResponse> for AddExerciseResponseBody {
    fn from(value: AddExerciseResponse) -> Self {
        let AddExerciseResponse { user, entry } = value;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            description: entry.description().to_string(),
            duration: entry.duration().minutes(),
            date: display_date(entry.date()),
        }
    }
}

/// Query string for `GET /api/exercise/log`.
///
/// Read from raw key/value pairs so repeated or unexpected keys never fail
/// the request; the first occurrence of each key wins.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ExerciseLogParams {
    /// Owner of the log.
    #[param(format = "uuid")]
    pub user_id: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`; ignored when malformed.
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`; ignored when malformed.
    pub to: Option<String>,
    /// Maximum entries to return; ignored unless a positive integer.
    pub limit: Option<String>,
}

impl ExerciseLogParams {
    /// Pick the recognised keys out of decoded query pairs.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            user_id: first_value(pairs, "userId"),
            from: first_value(pairs, "from"),
            to: first_value(pairs, "to"),
            limit: first_value(pairs, "limit"),
        }
    }
}

/// One entry of a log response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogEntryBody {
    pub description: String,
    pub duration: u32,
    #[schema(example = "Wed Jan 01 2020")]
    pub date: String,
}

impl From<&ExerciseEntry> for LogEntryBody {
    fn from(entry: &ExerciseEntry) -> Self {
        Self {
            description: entry.description().to_string(),
            duration: entry.duration().minutes(),
            date: display_date(entry.date()),
        }
    }
}

/// Filtered exercise log for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub username: String,
    /// Applied lower bound, present only when one was in effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(format = "date")]
    pub from: Option<String>,
    /// Applied upper bound, present only when one was in effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(format = "date")]
    pub to: Option<String>,
    pub count: usize,
    pub log: Vec<LogEntryBody>,
}

impl From<ExerciseLogResponse> for ExerciseLogResponseBody {
    fn from(value: ExerciseLogResponse) -> Self {
        let range = value.criteria.range();
        let echo = |date: Option<NaiveDate>| date.map(|day| day.format(DATE_FORMAT).to_string());
        Self {
            id: value.user.id().to_string(),
            username: value.user.username().to_string(),
            from: echo(range.from().date()),
            to: echo(range.to().date()),
            count: value.count(),
            log: value.entries.iter().map(LogEntryBody::from).collect(),
        }
    }
}

/// Append an exercise to a user's history.
#[utoipa::path(
    post,
    path = "/api/exercise/add",
    request_body(
        content((AddExerciseRequestBody = "application/json"), (AddExerciseRequestBody = "application/x-www-form-urlencoded"))
    ),
    responses(
        (status = 200, description = "Stored exercise", body = AddExerciseResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/add")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    payload: JsonOrForm<AddExerciseRequestBody>,
) -> ApiResult<web::Json<AddExerciseResponseBody>> {
    let body = into_body(payload);
    let user_id = parse_user_id(body.user_id, FieldName::new("userId"))?;
    let description = require(body.description, FieldName::new("description"))?;
    let duration = parse_whole_number(body.duration, FieldName::new("duration"))?;
    let date = parse_optional_date(body.date, FieldName::new("date"))?;

    let response = state
        .exercises
        .add_exercise(AddExerciseRequest {
            user_id,
            description,
            duration,
            date,
        })
        .await?;
    Ok(web::Json(AddExerciseResponseBody::from(response)))
}

/// Read a user's exercise log, optionally filtered by date and truncated.
///
/// Malformed `from`, `to` or `limit` values never fail the request; they
/// leave that side of the filter open.
#[utoipa::path(
    get,
    path = "/api/exercise/log",
    params(ExerciseLogParams),
    responses(
        (status = 200, description = "Filtered log", body = ExerciseLogResponseBody),
        (status = 400, description = "Missing or malformed userId", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "exerciseLog"
)]
#[get("/log")]
pub async fn exercise_log(
    state: web::Data<HttpState>,
    query: QueryPairs,
) -> ApiResult<web::Json<ExerciseLogResponseBody>> {
    let ExerciseLogParams {
        user_id,
        from,
        to,
        limit,
    } = ExerciseLogParams::from_pairs(&query);
    let user_id = parse_user_id(user_id, FieldName::new("userId"))?;

    let response = state
        .exercise_log
        .query_log(ExerciseLogRequest {
            user_id,
            from,
            to,
            limit,
        })
        .await?;
    Ok(web::Json(ExerciseLogResponseBody::from(response)))
}

#[cfg(test)]
#[path = "exercises_tests.rs"]
mod tests;
