use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, CreateAccount, Credentials, NewAccount, Role, UpdateAccount},
    repositories::account::{AccountRepository, FindByCol},
    services::account::AccountService,
};
use crate::services::password::PasswordScheme;

use async_trait::async_trait;
use chrono::Utc;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
    passwords: PasswordScheme,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>, passwords: PasswordScheme) -> Self {
        Self {
            repository,
            passwords,
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self
            .repository
            .find_one(FindByCol::Email(email.to_string()))
            .await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Account> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn save(&self, mut account: Account) -> AppResult<Account> {
        account.updated_at = Utc::now();

        let id = account.id;

        self.repository
            .update(account)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User not found with id: {id}"))
}

/// Returns the trimmed value when it carries any content.
fn provided(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn register(&self, new_account: CreateAccount) -> AppResult<Account> {
        let now = Utc::now();

        let account = self
            .repository
            .create(NewAccount {
                name: new_account.name,
                email: new_account.email,
                password: self.passwords.encode(&new_account.password)?,
                role: new_account.role.unwrap_or_default(),
                approved: false,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(account_id = account.id, role = %account.role, "account registered");

        Ok(account)
    }

    async fn validate_credentials(&self, credentials: Credentials) -> AppResult<bool> {
        Ok(match self.find_by_email(&credentials.email).await? {
            Some(account) => self
                .passwords
                .matches(&credentials.password, &account.password),
            None => false,
        })
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Account> {
        self.find_by_id(id).await
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Account> {
        self.find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found with email: {email}")))
    }

    async fn list_all(&self) -> AppResult<Vec<Account>> {
        Ok(self.repository.find_all().await?)
    }

    async fn update_profile(&self, id: i64, patch: UpdateAccount) -> AppResult<Account> {
        let mut account = self.find_by_id(id).await?;

        tracing::info!(
            account_id = id,
            name = patch.name.is_some(),
            email = patch.email.is_some(),
            password = patch.password.is_some(),
            "updating profile"
        );

        if let Some(name) = provided(patch.name) {
            account.name = name;
        }

        if let Some(email) = provided(patch.email) {
            account.email = email;
        }

        // Blank check uses the trimmed value, but the password is kept as sent.
        if let Some(password) = patch.password.filter(|p| !p.trim().is_empty()) {
            account.password = self.passwords.encode(&password)?;
        }

        self.save(account).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete_by_id(id).await?;

        tracing::info!(account_id = id, "account deleted");

        Ok(())
    }

    async fn promote_to_manager(&self, id: i64) -> AppResult<Account> {
        let mut account = self.find_by_id(id).await?;

        tracing::info!(account_id = id, from = %account.role, "promoting account to manager");

        account.role = Role::Manager;

        self.save(account).await
    }

    async fn record_login(&self, id: i64) -> AppResult<Account> {
        let mut account = self.find_by_id(id).await?;

        account.last_login = Some(Utc::now());

        self.save(account).await
    }
}
