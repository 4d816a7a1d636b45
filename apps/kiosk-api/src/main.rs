//! Kiosk API - REST server for the cafe product catalog and order intake

use axum_helpers::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to Postgres");
    let db =
        database::postgres::connect_from_config_with_retry(config.database.clone(), None).await?;
    database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;

    // Build REST router
    let api_routes = api::routes(db);
    let router = create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router.merge(health_router(config.app.clone()));

    info!("Starting Kiosk API on port {}", config.server.port);
    create_app(app, &config.server).await?;

    info!("Kiosk API shutdown complete");
    Ok(())
}
