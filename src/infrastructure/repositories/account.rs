use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, NewAccount};
use crate::domain::repositories::account::{AccountRepository, FindByCol};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountContent};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }

    /// Reserves the next account id. Ids burnt by a failed insert are not reused.
    async fn next_id(&self) -> RepositoryResult<i64> {
        let mut res = self
            .db
            .query("UPSERT ONLY type::thing('sequence', $table) SET value += 1 RETURN VALUE value")
            .bind(("table", ACCOUNT))
            .await?;

        res.take::<Option<i64>>(0)?
            .ok_or_else(|| RepositoryError::InvalidRecord("account sequence returned no value".into()))
    }
}

const ACCOUNT: &str = "account";

/// SurrealDB reports unique index violations as
/// "Database index `unique_email` already contains ...".
fn classify(error: surrealdb::Error) -> RepositoryError {
    let message = error.to_string();

    if message.contains("already contains") {
        RepositoryError::UniqueViolation(message)
    } else {
        RepositoryError::Database(error)
    }
}

fn convert(account: Option<SurrealAccount>) -> RepositoryResult<Option<Account>> {
    account.map(Account::try_from).transpose()
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, new_account: NewAccount) -> RepositoryResult<Account> {
        let id = self.next_id().await?;

        let account: Option<SurrealAccount> = self
            .db
            .create((ACCOUNT, id))
            .content(SurrealAccountContent::from(new_account))
            .await
            .map_err(classify)?;

        convert(account)?
            .ok_or_else(|| RepositoryError::InvalidRecord(format!("account {id} was not created")))
    }

    async fn update(&self, account: Account) -> RepositoryResult<Option<Account>> {
        let id = account.id;

        let account: Option<SurrealAccount> = self
            .db
            .update((ACCOUNT, id))
            .content(SurrealAccountContent::from(account))
            .await
            .map_err(classify)?;

        convert(account)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self.db.select((ACCOUNT, id)).await?;

        convert(account)
    }

    async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self
            .db
            .query(format!(
                "SELECT * FROM type::table($table) WHERE {column} = type::string($value) LIMIT 1"
            ))
            .bind(("table", ACCOUNT))
            .bind(("value", column.value()))
            .await?
            .take(0)?;

        convert(account)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Account>> {
        let accounts: Vec<SurrealAccount> = self
            .db
            .query("SELECT * FROM type::table($table) ORDER BY id")
            .bind(("table", ACCOUNT))
            .await?
            .take(0)?;

        accounts.into_iter().map(Account::try_from).collect()
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        let _: Option<SurrealAccount> = self.db.delete((ACCOUNT, id)).await?;

        Ok(())
    }
}
