//! Server configuration loaded from the environment.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use carta_db::DbConfig;
use tracing::{info, warn};

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Self {
        let defaults = DbConfig::default();
        Self {
            port: try_load("CARTA_PORT", "3000"),
            db: DbConfig {
                url: try_load("CARTA_DB_URL", &defaults.url),
                namespace: try_load("CARTA_DB_NAMESPACE", &defaults.namespace),
                database: try_load("CARTA_DB_DATABASE", &defaults.database),
                username: try_load("CARTA_DB_USERNAME", &defaults.username),
                password: try_load("CARTA_DB_PASSWORD", &defaults.password),
                operation_timeout: Duration::from_secs(try_load(
                    "CARTA_DB_TIMEOUT_SECS",
                    &defaults.operation_timeout.as_secs().to_string(),
                )),
            },
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
