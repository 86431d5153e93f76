use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::{AppError, message};
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccountDTO, CreateAccountDTO, CredentialsDTO, LoginDTO};

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(register).service(login);
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CreateAccountDTO,
    tag = "Auth",
)]
#[post("/register")]
pub async fn register(
    payload: Json<CreateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account_dto = payload.into_inner();

    let created_account = account_service.register(account_dto.into()).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(created_account)))
}

#[utoipa::path(
    responses(
        (status = 200, body = LoginDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CredentialsDTO,
    tag = "Auth"
)]
#[post("/login")]
pub async fn login(
    payload: Json<CredentialsDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let credentials_dto = payload.into_inner();
    let email = credentials_dto.email.clone();

    if !account_service
        .validate_credentials(credentials_dto.into())
        .await?
    {
        return Err(AppError::Unauthorized(message::INVALID_CREDENTIALS));
    }

    // The account can disappear between the two lookups.
    let account = account_service
        .get_by_email(&email)
        .await
        .map_err(|err| match err.code {
            404 => AppError::Unauthorized(message::USER_NOT_FOUND),
            _ => err,
        })?;

    Ok(HttpResponse::Ok().json(LoginDTO::success(account)))
}
