//! Replace axum's plain-text 404 and 405 bodies with the JSON error envelope.

use crate::error::AppError;

/// Any path that matches no route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// A known path requested with a method it does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
