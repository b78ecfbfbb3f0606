use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use parkside_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `parkside_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidInterval => {
                    (StatusCode::BAD_REQUEST, "INVALID_INTERVAL", core.to_string())
                }
                CoreError::UnknownVehicleType(_) => (
                    StatusCode::BAD_REQUEST,
                    "UNKNOWN_VEHICLE_TYPE",
                    core.to_string(),
                ),
                CoreError::SpotUnavailable(_) => {
                    (StatusCode::CONFLICT, "LOT_FULL", core.to_string())
                }
                CoreError::SpotStateConflict { .. } => {
                    (StatusCode::CONFLICT, "SPOT_STATE_CONFLICT", core.to_string())
                }
                CoreError::UnknownSpot(_) => {
                    (StatusCode::NOT_FOUND, "UNKNOWN_SPOT", core.to_string())
                }
                CoreError::AlreadyParked(_) => {
                    (StatusCode::CONFLICT, "ALREADY_PARKED", core.to_string())
                }
                CoreError::TicketNotFound(_) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Storage(msg) => {
                    tracing::error!(error = %msg, "Storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
