//! In-memory account store.
//!
//! Used by the test suite and for running the service without a database.
//! Each instance is independent.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{AccountStore, StoreError};
use crate::models::account::{Account, AccountData};

#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    accounts: BTreeMap<i64, Account>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.accounts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, data: AccountData) -> Result<Account, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;

        let account = Account {
            id: inner.last_id,
            name: data.name,
            email: data.email,
            address: data.address,
            phone_number: data.phone_number,
            date_joined: Utc::now().date_naive(),
        };
        inner.accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<Account, StoreError> {
        let mut inner = self.inner.lock().await;
        let stored = inner
            .accounts
            .get_mut(&account.id)
            .ok_or(StoreError::NotPersisted(account.id))?;

        stored.apply(account.data());
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.inner.lock().await.accounts.remove(&id);
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Option<Account>, StoreError> {
        Ok(self.inner.lock().await.accounts.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.inner.lock().await.accounts.values().cloned().collect())
    }
}
