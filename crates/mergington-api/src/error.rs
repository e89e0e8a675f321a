//! Error types for the activities API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"detail": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mergington_activities::ActivityError;
use mergington_types::ErrorDetail;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store rejected the request.
    #[error(transparent)]
    Activity(#[from] ActivityError),

    /// A required query parameter was missing or malformed.
    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// The HTTP status this error is reported with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Activity(ActivityError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Activity(ActivityError::AlreadyRegistered { .. }) => StatusCode::BAD_REQUEST,
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, axum::Json(ErrorDetail::new(self.to_string()))).into_response()
    }
}
