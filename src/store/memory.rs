use super::ProductStore;
use crate::error::AppError;
use crate::model::Product;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

/// Process-local store: a single mutex around an id-ordered map.
#[derive(Default)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> Result<Product, AppError> {
        let mut inner = self.lock();
        match product.id {
            None => {
                inner.last_id += 1;
                let id = inner.last_id;
                product.id = Some(id);
                inner.rows.insert(id, product.clone());
                tracing::debug!(id, "memory store insert");
            }
            Some(id) => {
                let slot = inner.rows.get_mut(&id).ok_or_else(AppError::product_not_found)?;
                *slot = product.clone();
                tracing::debug!(id, "memory store update");
            }
        }
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.lock().rows.remove(&id).map(|_| ()).ok_or_else(AppError::product_not_found)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock().rows.contains_key(&id))
    }
}
