//! HTTP handlers for product CRUD and the status probe.

pub mod product;
pub mod status;
pub use status::status;
