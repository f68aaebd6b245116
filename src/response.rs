//! Response bodies shared by handlers and error mapping.

use crate::service::FieldErrors;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// 400 body for rejected product payloads: `{"erros": {"Label": "message", ...}}`.
#[derive(Serialize, ToSchema)]
pub struct ValidationBody {
    #[schema(value_type = Object)]
    pub erros: FieldErrors,
}

/// `GET /api/status` body.
#[derive(Serialize)]
pub struct StatusBody {
    pub app: String,
    pub status: &'static str,
}
