use crate::api::dto::validation::{
    is_email, is_email_or_blank, is_name, is_name_or_blank, is_password,
};
use crate::domain::models::account::{Account, CreateAccount, Credentials, Role, UpdateAccount};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleDTO {
    User,
    Admin,
    Manager,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples(1))]
    id: i64,
    name: String,
    email: String,
    role: RoleDTO,
    approved: bool,
    #[schema(examples("2025-01-31 18:45:00"))]
    last_login: Option<String>,
    #[schema(examples("2025-01-31 18:45:00"))]
    created_at: String,
    #[schema(examples("2025-01-31 18:45:00"))]
    updated_at: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateAccountDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("your_name"))]
    pub name: String,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("p4ssw0rd"))]
    pub password: String,

    /// Defaults to `USER` when omitted.
    pub role: Option<RoleDTO>,
}

/// Missing fields read as empty and fail the credential check.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[serde(default)]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[serde(default)]
    #[schema(examples("p4ssw0rd"))]
    pub password: String,
}

/// Absent or blank fields are left unchanged.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateAccountDTO {
    #[validate(custom(function = "is_name_or_blank"))]
    #[schema(examples("your_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "is_email_or_blank"))]
    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[schema(examples("n3wP4ssw0rd"))]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct EmailQueryDTO {
    #[validate(length(min = 1, message = "Email must not be blank"))]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginDTO {
    #[schema(examples("Login successful"))]
    pub message: String,
    #[schema(examples(1))]
    pub id: i64,
    pub role: RoleDTO,
    #[schema(examples("your@email.com"))]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageDTO {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthDTO {
    #[schema(examples("ok"))]
    pub status: String,
    pub message: String,
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

impl From<Role> for RoleDTO {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RoleDTO::User,
            Role::Admin => RoleDTO::Admin,
            Role::Manager => RoleDTO::Manager,
        }
    }
}

impl From<RoleDTO> for Role {
    fn from(role: RoleDTO) -> Self {
        match role {
            RoleDTO::User => Role::User,
            RoleDTO::Admin => Role::Admin,
            RoleDTO::Manager => Role::Manager,
        }
    }
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            role: val.role.into(),
            approved: val.approved,
            last_login: val.last_login.map(timestamp),
            created_at: timestamp(val.created_at),
            updated_at: timestamp(val.updated_at),
        }
    }
}

impl From<CreateAccountDTO> for CreateAccount {
    fn from(create_account: CreateAccountDTO) -> Self {
        CreateAccount {
            name: create_account.name,
            email: create_account.email.trim().to_owned(),
            password: create_account.password,
            role: create_account.role.map(Into::into),
        }
    }
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

impl From<UpdateAccountDTO> for UpdateAccount {
    fn from(update: UpdateAccountDTO) -> Self {
        UpdateAccount {
            name: update.name,
            email: update.email,
            password: update.password,
        }
    }
}

impl LoginDTO {
    pub fn success(account: Account) -> Self {
        LoginDTO {
            message: "Login successful".to_string(),
            id: account.id,
            role: account.role.into(),
            email: account.email,
        }
    }
}
