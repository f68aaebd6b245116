//! OpenAPI document for the product API, served at `GET /api/openapi.json`.

use crate::handlers::product;
use crate::model::{Product, ProductInput};
use crate::response::{ErrorBody, ErrorDetail, ValidationBody};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(product::list, product::read, product::create, product::update, product::delete),
    components(schemas(Product, ProductInput, ErrorBody, ErrorDetail, ValidationBody)),
    tags((name = "produtos", description = "Product catalog CRUD"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_product_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/produtos"));
        assert!(doc.paths.paths.contains_key("/api/produtos/{id}"));
    }
}
