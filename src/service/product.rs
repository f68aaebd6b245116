//! Product use cases: validation in front of the store, plus the update-requires-existing rule.

use crate::error::AppError;
use crate::model::{Product, ProductInput};
use crate::service::ProductValidator;
use crate::store::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Product, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::product_not_found)
    }

    /// Validate and insert. Any client-supplied id is ignored.
    pub async fn create(&self, candidate: &ProductInput) -> Result<Product, AppError> {
        let fields = ProductValidator::validate(candidate)?;
        let saved = self.store.save(fields.into_product()).await?;
        tracing::info!(id = ?saved.id, "product created");
        Ok(saved)
    }

    /// Validate, then overwrite all five mutable fields of the existing record.
    /// Fetch and save are separate store calls; concurrent updates are last-write-wins.
    pub async fn update(&self, id: i64, candidate: &ProductInput) -> Result<Product, AppError> {
        let fields = ProductValidator::validate(candidate)?;
        let mut existing = self.get_by_id(id).await?;
        fields.apply_to(&mut existing);
        let saved = self.store.save(existing).await?;
        tracing::info!(id, "product updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store.delete_by_id(id).await?;
        tracing::info!(id, "product deleted");
        Ok(())
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        self.store.exists_by_id(id).await
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }

    pub async fn close(&self) {
        self.store.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryProductStore;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn service() -> ProductService {
        ProductService::new(Arc::new(MemoryProductStore::new()))
    }

    fn mouse() -> ProductInput {
        ProductInput {
            id: None,
            name: Some("Mouse".into()),
            description: Some("Mouse óptico USB".into()),
            price: Some(Decimal::from_str("49.90").unwrap()),
            stock_quantity: Some(10),
            manufacturer: Some("Logitech".into()),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_ignores_client_id() {
        let svc = service();
        let mut input = mouse();
        input.id = Some(99);
        let created = svc.create(&input).await.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(svc.get_by_id(1).await.unwrap(), created);
        assert!(matches!(svc.get_by_id(99).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn invalid_create_does_not_persist() {
        let svc = service();
        let mut input = mouse();
        input.description = Some("short".into());
        match svc.create(&input).await {
            Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_preserves_identity() {
        let svc = service();
        let id = svc.create(&mouse()).await.unwrap().id.unwrap();
        let mut changes = mouse();
        changes.id = Some(500);
        changes.name = Some("Mouse sem fio".into());
        changes.stock_quantity = Some(3);
        let updated = svc.update(id, &changes).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Mouse sem fio");
        assert_eq!(svc.get_by_id(id).await.unwrap().stock_quantity, 3);
        assert_eq!(svc.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let svc = service();
        assert!(matches!(svc.update(999, &mouse()).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_validates_before_lookup() {
        let svc = service();
        let err = svc.update(999, &ProductInput::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref e) if e.len() == 5));
    }

    #[tokio::test]
    async fn delete_then_exists() {
        let svc = service();
        let id = svc.create(&mouse()).await.unwrap().id.unwrap();
        assert!(svc.exists_by_id(id).await.unwrap());
        svc.delete(id).await.unwrap();
        assert!(!svc.exists_by_id(id).await.unwrap());
        assert!(matches!(svc.delete(id).await, Err(AppError::NotFound(_))));
    }
}
