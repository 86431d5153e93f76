use crate::domain::models::account::{Account, Role};
use ::surrealdb::{Surreal, engine::remote::ws::Client};
use chrono::Utc;

pub const SEED_EMAIL: &str = "test_account@email.com";
pub const SEED_PASSWORD: &str = "p4ssw0rd";

/// Inserts an account directly through SurrealQL, drawing its id from the
/// same sequence record the repository uses.
pub async fn seed_account(conn: &Surreal<Client>) -> Account {
    let query = format!(
        r#"
        LET $id = (UPSERT ONLY sequence:account SET value += 1 RETURN VALUE value);
        CREATE ONLY type::thing('account', $id) CONTENT {{
            name: '{}',
            email: '{}',
            password: '{}',
            role: 'USER',
            approved: false,
            created_at: time::now(),
            updated_at: time::now()
        }};
        RETURN $id;
        "#,
        "Test Account", SEED_EMAIL, SEED_PASSWORD
    );

    let id: Option<i64> = conn.query(query).await.unwrap().take(2).unwrap();

    let now = Utc::now();

    Account {
        id: id.unwrap(),
        name: "Test Account".to_string(),
        email: SEED_EMAIL.to_string(),
        password: SEED_PASSWORD.to_string(),
        role: Role::User,
        approved: false,
        last_login: None,
        created_at: now,
        updated_at: now,
    }
}
