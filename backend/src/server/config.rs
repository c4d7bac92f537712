//! Server settings loaded via OrthoConfig and the derived server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use exercise_tracker::outbound::persistence::{DEFAULT_POOL_MAX_SIZE, DbPool};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Runtime settings for the HTTP server.
///
/// Values come from `EXERCISE_*` environment variables, CLI flags or a
/// configuration file, in the precedence OrthoConfig applies.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXERCISE")]
pub struct ServerSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// PostgreSQL connection URL; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply pending migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the configured host is not an IP
    /// address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let ip = match self.host.as_deref() {
            None => DEFAULT_HOST,
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|err| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid host {raw:?}: {err}"),
                )
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, falling back to the adapter default.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the configured size is zero.
    pub fn pool_max_size(&self) -> std::io::Result<u32> {
        match self.pool_max_size {
            None => Ok(DEFAULT_POOL_MAX_SIZE),
            Some(0) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "pool_max_size must be at least 1",
            )),
            Some(size) => Ok(size),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration serving from the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool; repositories then use PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "EXERCISE_HOST",
        "EXERCISE_PORT",
        "EXERCISE_DATABASE_URL",
        "EXERCISE_POOL_MAX_SIZE",
        "EXERCISE_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("exercise-tracker")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_serve_from_memory_on_port_3000() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default host"),
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
        assert_eq!(settings.database_url(), None);
        assert_eq!(
            settings.pool_max_size().expect("default size"),
            DEFAULT_POOL_MAX_SIZE
        );
        assert!(settings.run_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EXERCISE_HOST", Some("127.0.0.1".to_owned())),
            ("EXERCISE_PORT", Some("8081".to_owned())),
            (
                "EXERCISE_DATABASE_URL",
                Some("postgres://app@localhost/exercise".to_owned()),
            ),
            ("EXERCISE_POOL_MAX_SIZE", Some("4".to_owned())),
            ("EXERCISE_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("valid host"),
            SocketAddr::from(([127, 0, 0, 1], 8081))
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://app@localhost/exercise")
        );
        assert_eq!(settings.pool_max_size().expect("valid size"), 4);
        assert!(!settings.run_migrations);
    }

    #[rstest]
    fn blank_database_url_means_memory_store() {
        let _guard = lock_env([
            ("EXERCISE_HOST", None::<String>),
            ("EXERCISE_PORT", None),
            ("EXERCISE_DATABASE_URL", Some("  ".to_owned())),
            ("EXERCISE_POOL_MAX_SIZE", None),
            ("EXERCISE_RUN_MIGRATIONS", None),
        ]);

        assert_eq!(load_from_empty_args().database_url(), None);
    }

    #[rstest]
    fn zero_pool_size_is_rejected() {
        let _guard = lock_env([
            ("EXERCISE_HOST", None::<String>),
            ("EXERCISE_PORT", None),
            ("EXERCISE_DATABASE_URL", None),
            ("EXERCISE_POOL_MAX_SIZE", Some("0".to_owned())),
            ("EXERCISE_RUN_MIGRATIONS", None),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.pool_max_size, Some(0));
        let err = settings
            .pool_max_size()
            .expect_err("a pool needs at least one connection");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn hostnames_are_rejected() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));
        let settings = ServerSettings {
            host: Some("localhost".to_owned()),
            ..load_from_empty_args()
        };

        let err = settings.bind_addr().expect_err("hostnames are not resolved");
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
