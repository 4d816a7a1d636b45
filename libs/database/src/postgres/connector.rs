use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{retry, retry_with_backoff, RetryConfig};

/// Connect to a PostgreSQL database with default pool settings.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(PostgresConfig::new(database_url)).await
}

/// Connect using a [`PostgresConfig`].
///
/// This is the recommended entry point when using configuration:
///
/// ```ignore
/// let config = PostgresConfig::from_env()?;
/// let db = connect_from_config(config).await?;
/// ```
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect with custom connection options for fine-grained pool control.
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect from config with automatic retry on failure.
///
/// Uses exponential backoff, which smooths over the database still
/// starting up when the service boots.
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();

    match retry_config {
        Some(retry_config) => {
            retry_with_backoff(
                || {
                    let opts = options.clone();
                    connect_with_options(opts)
                },
                retry_config,
            )
            .await
        }
        None => {
            retry(|| {
                let opts = options.clone();
                connect_with_options(opts)
            })
            .await
        }
    }
}

/// Run database migrations using the provided Migrator.
///
/// Generic over the app's `Migrator`; the migration files stay in the
/// `migration` crate, the running logic lives here.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running pending migrations for {}", app_name);
    M::up(db, None).await?;
    info!("Migrations up to date for {}", app_name);
    Ok(())
}
