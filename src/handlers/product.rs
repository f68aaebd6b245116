//! Product CRUD handlers under `/api/produtos`.

use crate::error::AppError;
use crate::model::{Product, ProductInput};
use crate::response::{ErrorBody, ValidationBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

fn parse_body(value: Value) -> Result<ProductInput, AppError> {
    if !value.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| AppError::BadRequest(format!("invalid product body: {}", e)))
}

#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "produtos",
    responses((status = 200, description = "Every stored product", body = [Product]))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.products.list_all().await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/produtos/{id}",
    tag = "produtos",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No product with this id", body = ErrorBody)
    )
)]
pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let product = state.products.get_by_id(id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/produtos",
    tag = "produtos",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Created product with its assigned id", body = Product),
        (status = 400, description = "Field validation failed", body = ValidationBody)
    )
)]
pub async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Result<impl IntoResponse, AppError> {
    let candidate = parse_body(body)?;
    let product = state.products.create(&candidate).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/produtos/{id}",
    tag = "produtos",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Field validation failed", body = ValidationBody),
        (status = 404, description = "No product with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let candidate = parse_body(body)?;
    let product = state.products.update(id, &candidate).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/produtos/{id}",
    tag = "produtos",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No product with this id", body = ErrorBody)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    // Best effort only: a concurrent delete between the check and the call still yields NotFound from the store.
    if !state.products.exists_by_id(id).await? {
        return Err(AppError::product_not_found());
    }
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
