use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::MovieId;

/// Request failures. The display text is sent verbatim as the plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid movie ID")]
    InvalidId,
    #[error("Invalid request")]
    InvalidBody(#[source] serde_json::Error),
    #[error("Movie not found")]
    NotFound(MovieId),
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidBody(err) => tracing::debug!(error = %err, "rejected request body"),
            AppError::NotFound(id) => tracing::debug!(id, "movie not found"),
            _ => {},
        }
        (self.status(), self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
