//! Account entity and its JSON representation.
//!
//! This module defines:
//! - `Account`: the persisted record, as loaded from the store
//! - `AccountData`: the client-settable part of an account, parsed from request bodies
//! - `DataValidationError`: why a request body could not be turned into `AccountData`

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::store::{AccountStore, StoreError};

/// Keys a request body must contain.
const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "address"];

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. `id` and `date_joined` are assigned by the
/// store when the record is created and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Account {
    /// Unique identifier, assigned by the store
    pub id: i64,

    pub name: String,

    pub email: String,

    pub address: String,

    /// Optional contact number
    pub phone_number: Option<String>,

    /// Day the account was created, assigned by the store
    pub date_joined: NaiveDate,
}

/// Client-settable account attributes.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Joe",
///   "email": "joe@x.com",
///   "address": "1 Main St",
///   "phone_number": "555-1234"
/// }
/// ```
///
/// Unknown keys (including `id` and `date_joined`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountData {
    pub name: String,

    pub email: String,

    pub address: String,

    #[serde(default, alias = "phone")]
    pub phone_number: Option<String>,
}

/// A request body that cannot be deserialized into an account.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataValidationError {
    /// The body is valid JSON but not an object (e.g. an array or a string).
    #[error("Invalid Account: body of request contained bad or no data")]
    InvalidShape,

    /// A required key is absent.
    #[error("Invalid Account: missing {0}")]
    MissingField(&'static str),

    /// A key is present but holds a value of the wrong type.
    #[error("Invalid Account: {0}")]
    InvalidValue(String),

    /// The body is not JSON at all.
    #[error("Invalid Account: request body is not valid JSON")]
    MalformedJson,
}

impl AccountData {
    /// Parse a JSON document into account attributes.
    ///
    /// # Errors
    ///
    /// - `InvalidShape` if `value` is not an object
    /// - `MissingField` if `name`, `email` or `address` is absent
    /// - `InvalidValue` if a field has the wrong type
    pub fn from_json(value: &Value) -> Result<Self, DataValidationError> {
        let object = value.as_object().ok_or(DataValidationError::InvalidShape)?;

        if let Some(missing) = REQUIRED_FIELDS
            .into_iter()
            .find(|field| !object.contains_key(*field))
        {
            return Err(DataValidationError::MissingField(missing));
        }

        Self::deserialize(value).map_err(|e| DataValidationError::InvalidValue(e.to_string()))
    }

    /// Parse a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, DataValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| DataValidationError::MalformedJson)?;
        Self::from_json(&value)
    }
}

impl Account {
    /// Render every attribute as a JSON object.
    ///
    /// `date_joined` is written as an ISO-8601 date (`YYYY-MM-DD`).
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "address": self.address,
            "phone_number": self.phone_number,
            "date_joined": self.date_joined.format("%Y-%m-%d").to_string(),
        })
    }

    /// The client-settable attributes of this account.
    pub fn data(&self) -> AccountData {
        AccountData {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    /// Overwrite the client-settable attributes from a JSON document.
    ///
    /// `id` and `date_joined` are left untouched. On error the account is unchanged.
    pub fn deserialize(&mut self, value: &Value) -> Result<(), DataValidationError> {
        self.apply(AccountData::from_json(value)?);
        Ok(())
    }

    /// Replace every client-settable attribute.
    pub fn apply(&mut self, data: AccountData) {
        self.name = data.name;
        self.email = data.email;
        self.address = data.address;
        self.phone_number = data.phone_number;
    }

    /// Persist a new account. The store assigns `id` and `date_joined`.
    pub async fn create(store: &dyn AccountStore, data: AccountData) -> Result<Self, StoreError> {
        tracing::info!("Creating account");
        store.create(data).await
    }

    /// Persist in-place changes of an existing account.
    pub async fn update(&self, store: &dyn AccountStore) -> Result<Self, StoreError> {
        tracing::info!(id = self.id, "Saving account");
        store.update(self).await
    }

    /// Remove this account from the store.
    pub async fn delete(&self, store: &dyn AccountStore) -> Result<(), StoreError> {
        tracing::info!(id = self.id, "Deleting account");
        store.delete(self.id).await
    }

    /// Look up an account by id. `Ok(None)` means no such account.
    pub async fn find(store: &dyn AccountStore, id: i64) -> Result<Option<Self>, StoreError> {
        tracing::info!(id, "Looking up account");
        store.find(id).await
    }

    /// Every persisted account.
    pub async fn all(store: &dyn AccountStore) -> Result<Vec<Self>, StoreError> {
        tracing::info!("Processing all accounts");
        store.all().await
    }
}
