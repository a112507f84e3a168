use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::{
    repository::Repositories,
    resource_service::Services,
    seed::{self, SeedData},
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `CONFIG_PATH` (default `config.toml`) if it exists, otherwise build the
/// config from env vars and defaults.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        return AppConfig::load_and_validate();
    }
    AppConfig::from_env()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect, migrate and wire the services over `db`. Seeds when enabled.
pub async fn prepare_state(cfg: &AppConfig, db: &DatabaseConnection) -> Result<ServerState, StartupError> {
    migration::Migrator::up(db, None)
        .await
        .map_err(|e| StartupError::Runtime(format!("migrate up: {e}")))?;

    let repos = Repositories::sea_orm(db);
    if cfg.seed.enabled {
        let data = match &cfg.seed.path {
            Some(path) => SeedData::from_file(path).await?,
            None => SeedData::builtin()?,
        };
        seed::seed(&repos, &data).await?;
    } else {
        warn!("seeding disabled; serving existing rows");
    }

    let policy = cfg.resources.reference_policy;
    info!(?policy, "reference policy");
    Ok(ServerState { services: Services::new(&repos, policy) })
}

/// Build the router over a fresh state, ready for `axum::serve`.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    common::env::ensure_database_dir(&cfg.database.url).await?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    let state = prepare_state(cfg, &db).await?;
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
