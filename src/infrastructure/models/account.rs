use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Id, Thing};

use crate::domain::models::account::{Account, NewAccount};
use crate::domain::repositories::repository::RepositoryError;

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    name: String,
    email: String,
    password: String,
    role: String,
    approved: bool,
    last_login: Option<Datetime>,
    created_at: Datetime,
    updated_at: Datetime,
}

/// Record body written on create and on full replace; the id lives in the
/// record key.
#[derive(Serialize)]
pub struct SurrealAccountContent {
    name: String,
    email: String,
    password: String,
    role: String,
    approved: bool,
    last_login: Option<Datetime>,
    created_at: Datetime,
    updated_at: Datetime,
}

impl From<NewAccount> for SurrealAccountContent {
    fn from(acc: NewAccount) -> Self {
        SurrealAccountContent {
            name: acc.name,
            email: acc.email,
            password: acc.password,
            role: acc.role.to_string(),
            approved: acc.approved,
            last_login: None,
            created_at: acc.created_at.into(),
            updated_at: acc.updated_at.into(),
        }
    }
}

impl From<Account> for SurrealAccountContent {
    fn from(acc: Account) -> Self {
        SurrealAccountContent {
            name: acc.name,
            email: acc.email,
            password: acc.password,
            role: acc.role.to_string(),
            approved: acc.approved,
            last_login: acc.last_login.map(Into::into),
            created_at: acc.created_at.into(),
            updated_at: acc.updated_at.into(),
        }
    }
}

impl TryFrom<SurrealAccount> for Account {
    type Error = RepositoryError;

    fn try_from(acc: SurrealAccount) -> Result<Self, Self::Error> {
        let id = match acc.id.id {
            Id::Number(id) => id,
            other => {
                return Err(RepositoryError::InvalidRecord(format!(
                    "expected a numeric account id, found `{other}`"
                )));
            }
        };

        Ok(Account {
            id,
            name: acc.name,
            email: acc.email,
            password: acc.password,
            role: acc.role.parse().map_err(RepositoryError::InvalidRecord)?,
            approved: acc.approved,
            last_login: acc.last_login.map(|at| at.0),
            created_at: acc.created_at.0,
            updated_at: acc.updated_at.0,
        })
    }
}
