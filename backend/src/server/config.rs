//! HTTP server configuration: environment-driven settings and wiring inputs.

use std::net::SocketAddr;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ports::GameRepository;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Configuration values loaded via OrthoConfig (CLI, environment, file).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GAMESHELF")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

/// Inputs for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: Arc<dyn GameRepository>,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and the
    /// repository the use-cases run against.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, repository: Arc<dyn GameRepository>) -> Self {
        Self {
            bind_addr,
            repository,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
