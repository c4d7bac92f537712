//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::MemoryStore;
use exercise_tracker::outbound::persistence::{DieselExerciseRepository, DieselUserRepository};

use super::ServerConfig;

/// Build the shared HTTP state for the configured storage backend.
///
/// Uses the Diesel repositories when a pool is available, otherwise a single
/// in-memory store backing both repository ports.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL repositories");
            HttpState::from_repositories(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselExerciseRepository::new(pool.clone())),
                clock,
            )
        }
        None => {
            info!("no database configured; using in-memory repositories");
            let store = Arc::new(MemoryStore::new());
            HttpState::from_repositories(Arc::clone(&store), store, clock)
        }
    };
    web::Data::new(state)
}
