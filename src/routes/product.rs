//! Product CRUD routes and the status probe, mounted under `/api`.

use crate::handlers::product::{create, delete as delete_handler, list, read, update};
use crate::handlers::status;
use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/produtos", get(list).post(create))
        .route("/produtos/:id", get(read).put(update).delete(delete_handler))
        .route("/status", get(status))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
