use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;
use crate::services::password::PasswordScheme;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(conn: Surreal<Client>, passwords: PasswordScheme) -> Self {
        let db = Arc::new(conn);

        let account_repository: Arc<dyn AccountRepository> =
            Arc::new(AccountRepositoryImpl::new(db.clone()));

        Self::with_repository(account_repository, passwords)
    }

    pub fn with_repository(
        account_repository: Arc<dyn AccountRepository>,
        passwords: PasswordScheme,
    ) -> Self {
        Container {
            account_service: account_service(account_repository, passwords),
        }
    }
}

fn account_service(
    account_repository: Arc<dyn AccountRepository>,
    passwords: PasswordScheme,
) -> Arc<dyn AccountService> {
    Arc::new(AccountServiceImpl::new(account_repository, passwords))
}
