use sea_orm::ConnectOptions;
use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{env_or_default, env_required, ConfigError, FromEnv};

/// PostgreSQL connection pool configuration.
///
/// Construct manually or load from environment variables (with the
/// `config` feature).
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Database connection URL (required)
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Connection idle timeout in seconds
    pub idle_timeout_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Convert this config into SeaORM ConnectOptions.
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 8,
            sqlx_logging: true,
        }
    }
}

/// Load PostgresConfig from environment variables.
///
/// - `DATABASE_URL` (required)
/// - `DB_MAX_CONNECTIONS` (default: 20)
/// - `DB_MIN_CONNECTIONS` (default: 2)
/// - `DB_CONNECT_TIMEOUT_SECS` (default: 8)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (default: 8)
/// - `DB_IDLE_TIMEOUT_SECS` (default: 8)
/// - `DB_SQLX_LOGGING` (default: true)
#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        fn parse_env<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
        where
            T::Err: std::fmt::Display,
        {
            env_or_default(key, default)
                .parse()
                .map_err(|e: T::Err| ConfigError::ParseError {
                    key: key.to_string(),
                    details: format!("{}", e),
                })
        }

        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: parse_env("DB_MAX_CONNECTIONS", "20")?,
            min_connections: parse_env("DB_MIN_CONNECTIONS", "2")?,
            connect_timeout_secs: parse_env("DB_CONNECT_TIMEOUT_SECS", "8")?,
            acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            idle_timeout_secs: parse_env("DB_IDLE_TIMEOUT_SECS", "8")?,
            sqlx_logging: parse_env("DB_SQLX_LOGGING", "true")?,
        })
    }
}

#[cfg(all(test, feature = "config"))]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = PostgresConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn from_env_applies_pool_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/kiosk")),
                ("DB_MAX_CONNECTIONS", None),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.max_connections, 20);
                assert_eq!(config.min_connections, 2);
                assert!(config.sqlx_logging);
            },
        );
    }

    #[test]
    fn from_env_rejects_bad_pool_size() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/kiosk")),
                ("DB_MAX_CONNECTIONS", Some("lots")),
            ],
            || {
                let err = PostgresConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
            },
        );
    }
}
