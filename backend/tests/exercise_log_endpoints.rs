//! End-to-end coverage of the exercise tracker HTTP surface.
//!
//! Requests run through the full app (trace middleware, extractor configs,
//! health checks and API scope) backed by the in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use exercise_tracker::inbound::http::{api_scope, route_not_found};
use exercise_tracker::inbound::http::health::{HealthState, live, ready};
use exercise_tracker::inbound::http::payload::{form_config, json_config, query_config};
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::MemoryStore;
use exercise_tracker::Trace;
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

struct StoppedClock(DateTime<Utc>);

impl Clock for StoppedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[fixture]
fn state() -> HttpState {
    let now = Utc
        .with_ymd_and_hms(2023, 11, 5, 23, 30, 0)
        .single()
        .expect("valid timestamp");
    let store = Arc::new(MemoryStore::new());
    HttpState::from_repositories(Arc::clone(&store), store, Arc::new(StoppedClock(now)))
}

async fn init_app(
    state: HttpState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(health)
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .app_data(form_config())
            .app_data(query_config())
            .wrap(Trace)
            .service(api_scope())
            .service(ready)
            .service(live)
            .default_service(web::to(route_not_found)),
    )
    .await
}

async fn send<S>(app: &S, request: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body: Value = test::read_body_json(response).await;
    (status, body)
}

fn assert_error_envelope(body: &Value, code: &str) {
    assert_eq!(body["code"], code);
    assert!(
        body["message"].as_str().is_some_and(|message| !message.is_empty()),
        "error message should be present: {body}"
    );
    assert!(body["traceId"].is_string(), "traceId missing: {body}");
}

#[rstest]
#[actix_web::test]
async fn full_workflow_registers_logs_and_filters(state: HttpState) {
    let app = init_app(state).await;

    let (status, user) = send(
        &app,
        TestRequest::post()
            .uri("/api/exercise/new-user")
            .set_form([("username", "fcc_test")]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = user["id"].as_str().expect("id").to_owned();

    for (description, duration, date) in [
        ("run", "30", "2020-01-01"),
        ("swim", "45", "2020-06-15"),
        ("cycle", "60", "2021-01-01"),
    ] {
        let (status, _) = send(
            &app,
            TestRequest::post().uri("/api/exercise/add").set_form([
                ("userId", id.as_str()),
                ("description", description),
                ("duration", duration),
                ("date", date),
            ]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        TestRequest::get().uri(&format!(
            "/api/exercise/log?userId={id}&from=2020-01-01&to=2020-12-31"
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["log"][0]["description"], "run");
    assert_eq!(body["log"][1]["date"], "Mon Jun 15 2020");

    let (_, body) = send(
        &app,
        TestRequest::get().uri(&format!("/api/exercise/log?userId={id}&limit=1")),
    )
    .await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["log"][0]["date"], "Wed Jan 01 2020");

    let (_, body) = send(
        &app,
        TestRequest::get().uri(&format!("/api/exercise/log?userId={id}&from=garbage")),
    )
    .await;
    assert_eq!(body["count"], 3);

    let (status, body) = send(
        &app,
        TestRequest::get().uri(&format!("/api/exercise/log?userId={id}&limit=1&limit=2")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
}

#[rstest]
#[actix_web::test]
async fn add_without_date_uses_the_injected_clock_in_utc(state: HttpState) {
    let app = init_app(state).await;
    let (_, user) = send(
        &app,
        TestRequest::post()
            .uri("/api/exercise/new-user")
            .set_json(json!({ "username": "late_night" })),
    )
    .await;

    let (status, body) = send(
        &app,
        TestRequest::post().uri("/api/exercise/add").set_json(json!({
            "userId": user["id"],
            "description": "stretching",
            "duration": 15
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "Sun Nov 05 2023");
    assert_eq!(body["username"], "late_night");
}

#[rstest]
#[actix_web::test]
async fn every_failure_uses_the_error_envelope(state: HttpState) {
    let app = init_app(state).await;
    let (_, user) = send(
        &app,
        TestRequest::post()
            .uri("/api/exercise/new-user")
            .set_json(json!({ "username": "taken" })),
    )
    .await;
    let id = user["id"].as_str().expect("id").to_owned();
    let stranger = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    let cases = [
        (
            TestRequest::post()
                .uri("/api/exercise/new-user")
                .set_json(json!({ "username": "taken" })),
            StatusCode::CONFLICT,
            "conflict",
        ),
        (
            TestRequest::post()
                .uri("/api/exercise/new-user")
                .set_json(json!({ "username": "x".repeat(21) })),
            StatusCode::BAD_REQUEST,
            "invalid_request",
        ),
        (
            TestRequest::post().uri("/api/exercise/add").set_json(json!({
                "userId": stranger,
                "description": "run",
                "duration": 10
            })),
            StatusCode::NOT_FOUND,
            "not_found",
        ),
        (
            TestRequest::post().uri("/api/exercise/add").set_json(json!({
                "userId": id,
                "description": "run",
                "duration": 10,
                "date": "yesterday"
            })),
            StatusCode::BAD_REQUEST,
            "invalid_request",
        ),
        (
            TestRequest::get().uri(&format!("/api/exercise/log?userId={stranger}")),
            StatusCode::NOT_FOUND,
            "not_found",
        ),
        (
            TestRequest::get().uri("/api/exercise/log"),
            StatusCode::BAD_REQUEST,
            "invalid_request",
        ),
        (
            TestRequest::get().uri("/api/exercise/nope"),
            StatusCode::NOT_FOUND,
            "not_found",
        ),
    ];

    for (request, expected_status, expected_code) in cases {
        let response = test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), expected_status);
        let header = response
            .headers()
            .get("trace-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace-id header");
        let body: Value = test::read_body_json(response).await;
        assert_error_envelope(&body, expected_code);
        assert_eq!(body["traceId"], header);
    }
}

#[rstest]
#[actix_web::test]
async fn users_are_listed_in_registration_order(state: HttpState) {
    let app = init_app(state).await;
    for name in ["charlie", "alice", "bob"] {
        let (status, _) = send(
            &app,
            TestRequest::post()
                .uri("/api/exercise/new-user")
                .set_json(json!({ "username": name })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, TestRequest::get().uri("/api/exercise/users")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|user| user["username"].as_str())
        .collect();
    assert_eq!(names, ["charlie", "alice", "bob"]);
}

#[rstest]
#[case("/health/ready")]
#[case("/health/live")]
#[actix_web::test]
async fn health_checks_report_ok(state: HttpState, #[case] path: &str) {
    let app = init_app(state).await;
    let response = test::call_service(&app, TestRequest::get().uri(path).to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
}
