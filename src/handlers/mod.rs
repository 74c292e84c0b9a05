//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (headers, body, URL params)
//! 2. Validates it and delegates to the account store
//! 3. Returns an HTTP response or an [`AppError`](crate::error::AppError)

/// Account management endpoints
pub mod accounts;
/// Fallbacks for unknown paths and methods
pub mod fallback;
/// Service health and metadata
pub mod health;
