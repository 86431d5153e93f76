use async_trait::async_trait;

use crate::domain::models::account::{Account, NewAccount};

use super::repository::RepositoryResult;

#[derive(Debug, Clone)]
pub enum FindByCol {
    Email(String),
}

impl FindByCol {
    pub fn value(self) -> String {
        match self {
            Self::Email(email) => email,
        }
    }
}

impl std::fmt::Display for FindByCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email(_) => write!(f, "email"),
        }
    }
}

/// Persistence for accounts. Email uniqueness is enforced here, at write
/// time, and reported as `RepositoryError::UniqueViolation`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, new_account: NewAccount) -> RepositoryResult<Account>;
    /// Replaces the stored record. Returns `None` when it no longer exists.
    async fn update(&self, account: Account) -> RepositoryResult<Option<Account>>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Account>>;
    async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<Account>>;
    async fn find_all(&self) -> RepositoryResult<Vec<Account>>;
    /// Deleting an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}
