//! User registration and listing handlers.
//!
//! ```text
//! POST /api/exercise/new-user {"username":"ada"}
//! GET /api/exercise/users
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;
use crate::domain::ports::RegisterUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::{JsonOrForm, into_body};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Registration body for `POST /api/exercise/new-user`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewUserRequestBody {
    #[schema(example = "ada")]
    pub username: Option<String>,
}

/// Public view of a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponseBody {
    #[schema(example = "ada")]
    pub username: String,
    #[schema(format = "uuid")]
    pub id: String,
}

impl From<&User> for UserResponseBody {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            id: user.id().to_string(),
        }
    }
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/exercise/new-user",
    request_body(
        content((NewUserRequestBody = "application/json"), (NewUserRequestBody = "application/x-www-form-urlencoded"))
    ),
    responses(
        (status = 200, description = "Registered user", body = UserResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username already taken", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/new-user")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: JsonOrForm<NewUserRequestBody>,
) -> ApiResult<web::Json<UserResponseBody>> {
    let body = into_body(payload);
    let username = require(body.username, FieldName::new("username"))?;
    let user = state
        .users
        .register_user(RegisterUserRequest { username })
        .await?;
    Ok(web::Json(UserResponseBody::from(&user)))
}

/// List every registered user in registration order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/exercise/users",
    responses(
        (status = 200, description = "Users", body = [UserResponseBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponseBody>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponseBody::from).collect()))
}
