//! Backend entry-point: configuration, persistence bootstrap, HTTP server.

use std::sync::Arc;

use actix_web::web;
use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::ports::GameRepository;
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{
    DbPool, DieselGameRepository, InMemoryGameRepository, PoolConfig,
};
use backend::server::{AppSettings, ServerConfig, create_server};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    // A configured but unreachable database is fatal: the process must not
    // begin serving traffic against a store it cannot reach.
    let repository: Arc<dyn GameRepository> = match settings.database_url() {
        Some(url) => {
            run_migrations(url).map_err(std::io::Error::other)?;
            let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
                .await
                .map_err(|e| {
                    std::io::Error::other(format!("database pool initialisation failed: {e}"))
                })?;
            pool.get().await.map_err(|e| {
                std::io::Error::other(format!("database connectivity check failed: {e}"))
            })?;
            info!("connected to the PostgreSQL game store");
            Arc::new(DieselGameRepository::new(pool))
        }
        None => {
            warn!("GAMESHELF_DATABASE_URL is not set; using the in-memory game store");
            Arc::new(InMemoryGameRepository::new())
        }
    };

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, repository))?;
    info!(%bind_addr, "gameshelf backend listening");
    server.await
}

fn run_migrations(database_url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|e| format!("failed to connect for migrations: {e}"))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| format!("failed to run migrations: {e}"))?;
    if !applied.is_empty() {
        info!(count = applied.len(), "applied pending database migrations");
    }
    Ok(())
}
