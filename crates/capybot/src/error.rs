//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orchestrator::TurnError;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

/// Every failure inside a turn surfaces as one internal error that carries
/// the underlying description.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match self {
            AppError::Internal(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", detail)
            }
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            detail,
        });
        (status, body).into_response()
    }
}

impl From<TurnError> for AppError {
    fn from(e: TurnError) -> Self {
        AppError::Internal(e.to_string())
    }
}
