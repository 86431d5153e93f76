use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, CreateAccount, Credentials, UpdateAccount};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn register(&self, new_account: CreateAccount) -> AppResult<Account>;
    async fn validate_credentials(&self, credentials: Credentials) -> AppResult<bool>;
    async fn get_by_id(&self, id: i64) -> AppResult<Account>;
    async fn get_by_email(&self, email: &str) -> AppResult<Account>;
    async fn list_all(&self) -> AppResult<Vec<Account>>;
    async fn update_profile(&self, id: i64, patch: UpdateAccount) -> AppResult<Account>;
    async fn delete(&self, id: i64) -> AppResult<()>;
    async fn promote_to_manager(&self, id: i64) -> AppResult<Account>;
    async fn record_login(&self, id: i64) -> AppResult<Account>;
}
