//! `GET /api/status`: application name and liveness marker.

use crate::response::StatusBody;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn status(State(state): State<AppState>) -> Json<StatusBody> {
    Json(StatusBody {
        app: state.app_name.to_string(),
        status: "OK",
    })
}
