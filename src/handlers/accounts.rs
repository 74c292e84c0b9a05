//! Account management HTTP handlers.
//!
//! This module implements the account resource:
//! - POST /accounts - Create new account
//! - GET /accounts - List all accounts
//! - GET /accounts/{id} - Read one account
//! - PUT /accounts/{id} - Replace an account's fields
//! - DELETE /accounts/{id} - Delete an account

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequestParts, Path, State, rejection::BytesRejection},
    http::{HeaderMap, StatusCode, header, request::Parts},
    response::IntoResponse,
};
use serde_json::Value;

use crate::{
    error::AppError,
    models::account::{Account, AccountData},
    state::AppState,
};

/// Media type accepted for account bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Account id taken from the `{id}` path segment.
///
/// A segment that is not an integer is reported as 404, as if the route did
/// not exist.
#[derive(Debug, Clone, Copy)]
pub struct AccountId(pub i64);

impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        Ok(Self(id))
    }
}

/// Reject the request unless `Content-Type` is exactly `media_type`.
///
/// The comparison is byte-for-byte: parameters such as `; charset=utf-8`
/// make the header a mismatch.
pub fn check_content_type(headers: &HeaderMap, media_type: &str) -> Result<(), AppError> {
    let content_type = headers.get(header::CONTENT_TYPE);
    if content_type.is_some_and(|value| value.as_bytes() == media_type.as_bytes()) {
        return Ok(());
    }

    tracing::error!(content_type = ?content_type, "Invalid Content-Type");
    Err(AppError::UnsupportedMediaType(media_type.to_string()))
}

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Joe",
///   "email": "joe@x.com",
///   "address": "1 Main St",
///   "phone_number": "555-1234"  // optional
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created account, `Location: /accounts/{id}`
/// - **Error (415)**: `Content-Type` is not `application/json`
/// - **Error (400)**: body is not an object or lacks a required field
/// - **Error (413)**: body exceeds the request size limit
///
/// ```json
/// {
///   "id": 1,
///   "name": "Joe",
///   "email": "joe@x.com",
///   "address": "1 Main St",
///   "phone_number": "555-1234",
///   "date_joined": "2025-12-20"
/// }
/// ```
pub async fn create_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Request to create an Account");
    check_content_type(&headers, JSON_MEDIA_TYPE)?;

    let data = AccountData::from_slice(&body?)?;
    let account = Account::create(state.store(), data).await?;

    let location = format!("/accounts/{}", account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account.to_json()),
    ))
}

/// List all accounts.
///
/// # Response
///
/// - **Success (200 OK)**: array of accounts (may be empty)
pub async fn list_accounts(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    tracing::info!("Request to list Accounts");

    let accounts: Vec<Value> = Account::all(state.store())
        .await?
        .iter()
        .map(Account::to_json)
        .collect();

    tracing::info!("Returning [{}] accounts", accounts.len());
    Ok(Json(accounts))
}

/// Read a single account.
///
/// # Response
///
/// - **Success (200 OK)**: the account
/// - **Error (404)**: no account with this id
pub async fn get_account(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
) -> Result<Json<Value>, AppError> {
    tracing::info!("Request to read an Account with id: {}", account_id);

    let account = Account::find(state.store(), account_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(account.to_json()))
}

/// Replace the client-settable fields of an account.
///
/// The body has the same shape as for creation. `id` and `date_joined` in the
/// body are ignored; omitted optional fields are cleared.
///
/// # Response
///
/// - **Success (200 OK)**: the updated account
/// - **Error (404)**: no account with this id
/// - **Error (415)**: `Content-Type` is not `application/json`
/// - **Error (400)**: body is not an object or lacks a required field
/// - **Error (413)**: body exceeds the request size limit
pub async fn update_account(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, AppError> {
    tracing::info!("Request to update an Account with id: {}", account_id);

    let mut account = Account::find(state.store(), account_id)
        .await?
        .ok_or(AppError::NotFound)?;

    check_content_type(&headers, JSON_MEDIA_TYPE)?;
    account.apply(AccountData::from_slice(&body?)?);
    let account = account.update(state.store()).await?;

    Ok(Json(account.to_json()))
}

/// Delete an account.
///
/// Always returns 204 No Content, whether or not the account existed.
pub async fn delete_account(
    State(state): State<AppState>,
    AccountId(account_id): AccountId,
) -> Result<StatusCode, AppError> {
    tracing::info!("Request to delete an Account with id: {}", account_id);

    if let Some(account) = Account::find(state.store(), account_id).await? {
        account.delete(state.store()).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}
