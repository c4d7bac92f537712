//! Backend entry-point: loads settings, prepares storage and serves the API.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

/// Apply pending migrations off the async runtime.
async fn migrate(database_url: &str) -> io::Result<()> {
    let url = database_url.to_owned();
    let applied = web::block(move || run_pending_migrations(&url))
        .await
        .map_err(|error| io::Error::other(format!("migration task failed: {error}")))?
        .map_err(|error| io::Error::other(error.to_string()))?;
    info!(applied, "database migrations complete");
    Ok(())
}

async fn build_config(settings: &ServerSettings) -> io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr()?);
    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };

    if settings.run_migrations {
        migrate(database_url).await?;
    }
    let pool_config = PoolConfig::new(database_url).with_max_size(settings.pool_max_size()?);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|error| io::Error::other(format!("database pool: {error}")))?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let config = build_config(&settings).await?;
    let bind_addr = config.bind_addr();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "exercise tracker listening");

    let result = server.await;
    health_state.mark_unhealthy();
    info!("server stopped");
    result
}
