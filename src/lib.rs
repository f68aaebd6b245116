//! Produto API: product catalog CRUD over HTTP with field validation and PostgreSQL or in-memory storage.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreBackend};
pub use error::{AppError, ConfigError};
pub use model::{NewProduct, Product, ProductInput};
pub use routes::{app, common_routes, product_routes};
pub use service::{FieldErrors, ProductService, ProductValidator};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema, MemoryProductStore, PgProductStore, ProductStore};
