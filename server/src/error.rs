//! HTTP error shaping.
//!
//! Every rejected request yields a JSON body with a `detail` field.
//! `NotFound` gets its own variant because four routes map it to 404;
//! any other store failure surfaces as 500 — the service makes no
//! attempt to recover from persistence errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use todo_store::StoreError;

/// JSON error body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// 404 `{"detail":"Todo not found"}`.
    NotFound,
    /// 422 with the given detail message.
    Validation(&'static str),
    /// 500; the store failed and the request cannot be served.
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, Detail::new("Todo not found")),
            Self::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, Detail::new(msg)),
            Self::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Detail::new(err.to_string()))
            }
        };
        (status, Json(detail)).into_response()
    }
}
