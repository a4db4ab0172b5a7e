//! Application settings and the HTTP server configuration object.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use user_directory::outbound::persistence::{DbPool, PoolConfig};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const PRODUCTION_ENV: &str = "prod";

/// Settings layered from CLI flags, `USERS_*` environment variables and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct AppSettings {
    /// PostgreSQL connection string. Required.
    pub database_url: Option<String>,
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Deployment environment; `prod` disables the API documentation.
    pub env: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// Configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Interface to bind, defaulting to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind, defaulting to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Whether Swagger UI and the OpenAPI document are served.
    pub fn docs_enabled(&self) -> bool {
        !self
            .env
            .as_deref()
            .is_some_and(|env| env.trim().eq_ignore_ascii_case(PRODUCTION_ENV))
    }

    /// Pool configuration for `database_url`.
    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE).max(1))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) docs_enabled: bool,
}

impl ServerConfig {
    /// Construct a configuration serving users from `db_pool`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            docs_enabled: true,
        }
    }

    /// Toggle Swagger UI and the OpenAPI document.
    #[must_use]
    pub fn with_docs(mut self, enabled: bool) -> Self {
        self.docs_enabled = enabled;
        self
    }
}
