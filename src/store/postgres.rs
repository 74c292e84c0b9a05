//! PostgreSQL-backed account store.

use async_trait::async_trait;

use super::{AccountStore, StoreError};
use crate::{
    db::DbPool,
    models::account::{Account, AccountData},
};

/// Account store over the `accounts` table.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, data: AccountData) -> Result<Account, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, address, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.address)
        .bind(data.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<Account, StoreError> {
        // id and date_joined are never written after insert
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = $1, email = $2, address = $3, phone_number = $4
            WHERE id = $5
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotPersisted(account.id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn all(&self) -> Result<Vec<Account>, StoreError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }
}
