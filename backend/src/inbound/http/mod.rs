//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod exercises;
pub mod health;
pub mod payload;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::{HttpRequest, HttpResponse, Scope, web};

use crate::domain::Error;

pub use error::ApiResult;

/// Mount point for the exercise tracker API.
pub const API_SCOPE: &str = "/api/exercise";

/// Build the API scope with every exercise tracker endpoint registered.
///
/// Callers still provide `HttpState` and the extractor configs from
/// [`payload`] as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope(API_SCOPE)
        .service(users::register_user)
        .service(users::list_users)
        .service(exercises::add_exercise)
        .service(exercises::exercise_log)
}

/// Fallback for unmatched routes, answering with the error envelope.
///
/// Register with `App::default_service(web::to(route_not_found))`.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    use super::test_utils::{memory_state, test_app};

    #[rstest]
    #[case(actix_test::TestRequest::get().uri("/nowhere"), "no route for GET /nowhere")]
    #[case(
        actix_test::TestRequest::get().uri("/api/exercise/unknown"),
        "no route for GET /api/exercise/unknown"
    )]
    #[case(
        actix_test::TestRequest::delete().uri("/api/exercise/users"),
        "no route for DELETE /api/exercise/users"
    )]
    #[actix_web::test]
    async fn unmatched_routes_use_error_envelope(
        #[case] request: actix_test::TestRequest,
        #[case] message: &str,
    ) {
        let app = actix_test::init_service(test_app(memory_state())).await;
        let res = actix_test::call_service(&app, request.to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers().contains_key("trace-id"));
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["message"], message);
        assert!(body["traceId"].is_string());
    }
}
