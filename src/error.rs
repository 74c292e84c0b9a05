//! Error types and HTTP error response handling.
//!
//! Every error leaves the service as the same JSON envelope:
//!
//! ```json
//! { "error": "Not Found", "message": "The requested resource was not found." }
//! ```

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{models::account::DataValidationError, store::StoreError};

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error label.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body could not be turned into an account.
    ///
    /// Returns HTTP 400 Bad Request with the validation message.
    #[error(transparent)]
    Validation(#[from] DataValidationError),

    /// `Content-Type` header is missing or not the expected media type.
    ///
    /// Returns HTTP 415 Unsupported Media Type.
    #[error("Content-Type must be {0}")]
    UnsupportedMediaType(String),

    /// No resource at this path (unknown route or unknown account id).
    ///
    /// Returns HTTP 404 Not Found.
    #[error("The requested resource was not found.")]
    NotFound,

    /// Route exists but does not accept this method.
    ///
    /// Returns HTTP 405 Method Not Allowed.
    #[error("The requested method is not allowed for this endpoint.")]
    MethodNotAllowed,

    /// Request body could not be read (e.g. larger than the body limit).
    ///
    /// Returns the rejection's own status, usually 413 Payload Too Large.
    #[error("{}", .0.body_text())]
    Body(#[from] BytesRejection),

    /// Store backend failed.
    ///
    /// Returns HTTP 500 Internal Server Error (hides details from client).
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    fn status_and_label(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            AppError::UnsupportedMediaType(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported media type")
            }
            AppError::NotFound | AppError::Store(StoreError::NotPersisted(_)) => {
                (StatusCode::NOT_FOUND, "Not Found")
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            AppError::Body(rejection) => {
                let status = rejection.status();
                (status, status.canonical_reason().unwrap_or("Bad Request"))
            }
            AppError::Store(StoreError::Database(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Status Code Mapping
///
/// - `Validation` → 400 Bad Request
/// - `UnsupportedMediaType` → 415 Unsupported Media Type
/// - `NotFound` → 404 Not Found
/// - `MethodNotAllowed` → 405 Method Not Allowed
/// - `Body` → status of the body rejection (413 for oversized bodies)
/// - `Store` → 500 Internal Server Error, or 404 if the account vanished mid-request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, label) = self.status_and_label();

        let message = match self {
            AppError::Store(StoreError::Database(ref e)) => {
                tracing::error!(error = %e, "Store operation failed");
                "An internal error occurred".to_string()
            }
            AppError::Store(StoreError::NotPersisted(_)) => AppError::NotFound.to_string(),
            ref other => other.to_string(),
        };

        let body = Json(json!({
            "error": label,
            "message": message
        }));

        (status, body).into_response()
    }
}
