//! Keyed product storage. `PgProductStore` backs production; `MemoryProductStore` backs tests and local runs.

mod memory;
mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::{ensure_database_exists, ensure_schema, PgProductStore};

use crate::error::AppError;
use crate::model::Product;
use async_trait::async_trait;

/// Every call is atomic with respect to concurrent callers.
/// Ids are assigned in increasing order and never reused.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All records in id order.
    async fn find_all(&self) -> Result<Vec<Product>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Insert when `product.id` is `None` (a new id is assigned); otherwise overwrite
    /// the whole record, failing with `NotFound` if it does not exist.
    async fn save(&self, product: Product) -> Result<Product, AppError>;

    /// Fails with `NotFound` if no record has this id.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Reachability check for readiness probes.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    /// Release backing resources on shutdown.
    async fn close(&self) {}
}
