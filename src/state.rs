//! Shared application state for all routes, built once at startup.

use crate::config::{AppConfig, StoreBackend};
use crate::error::AppError;
use crate::service::ProductService;
use crate::store::{ensure_database_exists, ensure_schema, MemoryProductStore, PgProductStore, ProductStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    /// Reported by `GET /api/status`.
    pub app_name: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, app_name: &str) -> Self {
        Self {
            products: ProductService::new(store),
            app_name: Arc::from(app_name),
        }
    }

    /// Connect the configured store. For PostgreSQL this creates the database and
    /// the `produtos` table when missing.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let store: Arc<dyn ProductStore> = match config.store {
            StoreBackend::Memory => {
                tracing::info!("using in-memory product store");
                Arc::new(MemoryProductStore::new())
            }
            StoreBackend::Postgres => {
                ensure_database_exists(&config.database_url).await?;
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .connect(&config.database_url)
                    .await?;
                ensure_schema(&pool).await?;
                tracing::info!("using PostgreSQL product store");
                Arc::new(PgProductStore::new(pool))
            }
        };
        Ok(Self::new(store, &config.app_name))
    }

    /// Flush and release the store. Call after the server has stopped accepting requests.
    pub async fn shutdown(&self) {
        self.products.close().await;
    }
}
