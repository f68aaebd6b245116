//! Runtime settings read from the environment (a `.env` file is loaded by the server binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_APP_NAME: &str = "Why Not Data - API";
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/produtos";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Which `ProductStore` implementation backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}', expected 'postgres' or 'memory'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// `DATABASE_URL`
    pub database_url: String,
    /// `BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `PRODUTO_STORE`
    pub store: StoreBackend,
    /// `DB_MAX_CONNECTIONS`
    pub db_max_connections: u32,
    /// `APP_NAME`, reported by `GET /api/status`.
    pub app_name: String,
    /// `STATIC_DIR`: when set, unmatched paths are served from this directory.
    pub static_dir: Option<PathBuf>,
    /// `MAX_BODY_BYTES`
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store: StoreBackend::Postgres,
            db_max_connections: 5,
            app_name: DEFAULT_APP_NAME.into(),
            static_dir: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    /// In-memory configuration, as used by tests.
    pub fn in_memory() -> Self {
        Self {
            store: StoreBackend::Memory,
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or empty keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = parse("BIND_ADDR", &addr)?;
        }
        if let Some(store) = get("PRODUTO_STORE") {
            config.store = store.parse().map_err(|reason| ConfigError::Invalid {
                key: "PRODUTO_STORE",
                value: store.clone(),
                reason,
            })?;
        }
        if let Some(n) = get("DB_MAX_CONNECTIONS") {
            config.db_max_connections = parse("DB_MAX_CONNECTIONS", &n)?;
            if config.db_max_connections == 0 {
                return Err(ConfigError::Invalid {
                    key: "DB_MAX_CONNECTIONS",
                    value: n,
                    reason: "must be at least 1".into(),
                });
            }
        }
        if let Some(name) = get("APP_NAME") {
            config.app_name = name;
        }
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = Some(PathBuf::from(dir));
        }
        if let Some(n) = get("MAX_BODY_BYTES") {
            config.max_body_bytes = parse("MAX_BODY_BYTES", &n)?;
        }
        Ok(config)
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
