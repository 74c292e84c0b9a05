//! Persistence gateway for accounts.
//!
//! Handlers never talk to the database directly; they go through an
//! [`AccountStore`], which lets tests swap PostgreSQL for [`MemoryAccountStore`].

use async_trait::async_trait;

use crate::models::account::{Account, AccountData};

mod memory;
mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

/// Failure reported by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed (connection error, constraint violation, ...).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An update targeted an account the store does not hold.
    #[error("Account {0} has not been persisted")]
    NotPersisted(i64),
}

/// CRUD operations over persisted accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account, assigning its id and join date.
    async fn create(&self, data: AccountData) -> Result<Account, StoreError>;

    /// Overwrite the client-settable fields of an existing account.
    ///
    /// Returns `StoreError::NotPersisted` if no account has `account.id`.
    async fn update(&self, account: &Account) -> Result<Account, StoreError>;

    /// Remove an account. Removing an unknown id succeeds without effect.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    async fn find(&self, id: i64) -> Result<Option<Account>, StoreError>;

    /// All accounts, in no guaranteed order.
    async fn all(&self) -> Result<Vec<Account>, StoreError>;
}
