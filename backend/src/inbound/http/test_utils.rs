//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use crate::Trace;
use crate::inbound::http::payload::{form_config, json_config, query_config};
use crate::inbound::http::{api_scope, route_not_found};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemoryStore;

/// Clock pinned to a single instant.
pub struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Calendar day reported by [`fixture_clock`].
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid fixture date")
}

/// Clock fixed at midday on [`fixture_today`].
pub fn fixture_clock() -> Arc<dyn Clock> {
    let utc_now = Utc
        .with_ymd_and_hms(2024, 3, 9, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp");
    Arc::new(FixtureClock { utc_now })
}

/// State backed by a fresh in-memory store and the fixture clock.
pub fn memory_state() -> HttpState {
    let store = Arc::new(MemoryStore::new());
    HttpState::from_repositories(Arc::clone(&store), store, fixture_clock())
}

/// App with the API scope, extractor configs, fallback route and trace
/// middleware mounted.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(form_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(api_scope())
        .default_service(web::to(route_not_found))
}
