//! ProductService: validation and persistence orchestration.

mod product;
mod validation;
pub use product::ProductService;
pub use validation::{field_label, FieldErrors, ProductValidator};
