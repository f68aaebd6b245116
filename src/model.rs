//! Product entity and its inbound/validated forms. JSON keys follow the Portuguese API locale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored catalog item. `id` is `None` until the store assigns one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Option<i64>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(rename = "quantidadeEstoque")]
    pub stock_quantity: i32,
    #[serde(rename = "fabricante")]
    pub manufacturer: String,
}

/// Request body for create and update. Every field is optional so that a missing
/// field surfaces as a validation message instead of a decoding error.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct ProductInput {
    /// Accepted but ignored: ids are assigned by the store and taken from the path on update.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "nome")]
    pub name: Option<String>,
    #[serde(default, rename = "descricao")]
    pub description: Option<String>,
    #[serde(default, rename = "preco", with = "rust_decimal::serde::arbitrary_precision_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    #[serde(default, rename = "quantidadeEstoque")]
    pub stock_quantity: Option<i32>,
    #[serde(default, rename = "fabricante")]
    pub manufacturer: Option<String>,
}

/// The five mutable fields of a product after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub manufacturer: String,
}

impl NewProduct {
    /// A product not yet stored.
    pub fn into_product(self) -> Product {
        Product {
            id: None,
            name: self.name,
            description: self.description,
            price: self.price,
            stock_quantity: self.stock_quantity,
            manufacturer: self.manufacturer,
        }
    }

    /// Overwrite every mutable field of `existing`; the id is left untouched.
    pub fn apply_to(self, existing: &mut Product) {
        existing.name = self.name;
        existing.description = self.description;
        existing.price = self.price;
        existing.stock_quantity = self.stock_quantity;
        existing.manufacturer = self.manufacturer;
    }
}
