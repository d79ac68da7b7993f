//! Error type for HTTP handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use super::envelope::ErrorBody;
use crate::error::StoreError;

/// Error type for request handling.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or invalid request body.
    #[error("{0}")]
    Validation(&'static str),
    /// Record not found; carries the resource-specific message.
    #[error("{0}")]
    NotFound(&'static str),
    /// No route matches the path.
    #[error("Not Found")]
    RouteNotFound,
    /// The path exists but not for this method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// Persistence failure. Never shown to clients.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message rendered into the `{ "error": ... }` body.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Store(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Store(err) => error!(error = %err, "store operation failed"),
            ApiError::Validation(msg) => warn!(reason = msg, "rejected request"),
            _ => {}
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
