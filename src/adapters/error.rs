use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::application::error::ApplicationError;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApplicationError::NotFound => {
                warn!("resource not found");
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            ApplicationError::Unauthenticated => {
                warn!("request without a valid session");
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            ApplicationError::Forbidden(ref msg) => {
                warn!("forbidden: {}", msg);
                (StatusCode::FORBIDDEN, msg.clone())
            }
            ApplicationError::QuotaExceeded { limit, tier } => {
                warn!("upload quota reached: {} files for {} tier", limit, tier);
                (
                    StatusCode::FORBIDDEN,
                    format!("Upload limit reached. Max {} files for {} users.", limit, tier),
                )
            }
            ApplicationError::Validation(ref msg) => {
                warn!("validation failed: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApplicationError::Upstream(ref msg) => {
                error!("upstream fetch failed: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to fetch file from storage".to_string(),
                )
            }
            ApplicationError::DatabaseError(ref msg) => {
                error!("database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApplicationError::InternalError(ref msg) => {
                error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
