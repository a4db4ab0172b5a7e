//! Service entry point: loads settings, migrates the database and serves the
//! users REST API with its OpenAPI documentation.

mod server;

use std::net::{IpAddr, SocketAddr};

use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{AppSettings, ServerConfig, create_server};
use user_directory::outbound::persistence::{DbPool, run_pending_migrations};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let database_url = settings
        .database_url()
        .ok_or_else(|| eyre!("USERS_DATABASE_URL must be set"))?
        .to_owned();

    let migration_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .wrap_err("migration task failed")??;
    info!(applied, "database schema up to date");

    let pool = DbPool::new(settings.pool_config(&database_url))
        .await
        .wrap_err("failed to create database pool")?;

    let host: IpAddr = settings
        .host()
        .parse()
        .wrap_err_with(|| format!("invalid bind host {}", settings.host()))?;
    let bind_addr = SocketAddr::new(host, settings.port());
    let config = ServerConfig::new(bind_addr, pool).with_docs(settings.docs_enabled());

    create_server(config)?.await?;
    info!("server stopped");
    Ok(())
}
