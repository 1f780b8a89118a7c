use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::blob::BlobError;
use crate::response::ApiResponse;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("not found")]
    NotFound,

    #[error("duplicate {0}")]
    Duplicate(&'static str),

    #[error("wrong password")]
    WrongPassword,

    #[error("order has no items")]
    EmptyOrder,

    #[error("storage error")]
    Store(StoreError),

    #[error("object storage error")]
    Blob(#[from] BlobError),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Missing => AppError::NotFound,
            other => AppError::Store(other),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Absent resources, duplicates, and bad credentials are data-level
        // outcomes, not transport failures; not_found and wrong_password
        // share the HTTP status so responses do not leak existence.
        let (status_code, outcome) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "error"),
            AppError::NotFound => (StatusCode::OK, "not_found"),
            AppError::Duplicate(_) => (StatusCode::OK, "duplicate"),
            AppError::WrongPassword => (StatusCode::OK, "wrong_password"),
            AppError::EmptyOrder => (StatusCode::OK, "no_items"),
            AppError::Store(_) | AppError::Blob(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "error")
            }
        };

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "request failed");
        }

        let body = ApiResponse::<serde_json::Value>::outcome(outcome, self.to_string());
        (status_code, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
