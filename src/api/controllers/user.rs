use std::sync::Arc;

use crate::api::dto::account::{
    AccountDTO, EmailQueryDTO, HealthDTO, MessageDTO, UpdateAccountDTO,
};
use crate::api::error::ApiResult;
use crate::api::middlewares::validate::{Json, Query};
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use actix_web::{
    HttpResponse, delete, get, put,
    web::{Data as State, Path},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(check)
        .service(list)
        .service(by_email)
        .service(get_one)
        .service(update)
        .service(remove)
        .service(promote)
        .service(last_login);
}

#[utoipa::path(
    responses((status = 200, body = HealthDTO)),
    tag = "Users"
)]
#[get("/users/check")]
pub async fn check() -> ApiResult {
    Ok(HttpResponse::Ok().json(HealthDTO {
        status: "ok".to_string(),
        message: "Backend is reachable and CORS is working!".to_string(),
    }))
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<AccountDTO>),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Users"
)]
#[get("/users")]
pub async fn list(account_service: State<Arc<dyn AccountService>>) -> ApiResult {
    let accounts = account_service.list_all().await?;

    Ok(HttpResponse::Ok().json(
        accounts
            .into_iter()
            .map(AccountDTO::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    params(EmailQueryDTO),
    responses(
        (status = 200, body = AccountDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 422, body = AppError, example = json!(AppError::example_422()))
    ),
    tag = "Users"
)]
#[get("/users/by-email")]
pub async fn by_email(
    query: Query<EmailQueryDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service.get_by_email(&query.email).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, body = AppError, example = json!(AppError::example_404()))
    ),
    tag = "Users"
)]
#[get("/users/{id:\\d+}")]
pub async fn get_one(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service.get_by_id(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    request_body = UpdateAccountDTO,
    responses(
        (status = 200, body = AccountDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422()))
    ),
    tag = "Users"
)]
#[put("/users/{id:\\d+}")]
pub async fn update(
    id: Path<i64>,
    payload: Json<UpdateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service
        .update_profile(id.into_inner(), payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = MessageDTO),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Users"
)]
#[delete("/users/{id:\\d+}")]
pub async fn remove(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    account_service.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageDTO {
        message: "User deleted successfully".to_string(),
    }))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, body = AppError, example = json!(AppError::example_404()))
    ),
    tag = "Users"
)]
#[put("/users/{id:\\d+}/promote")]
pub async fn promote(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service.promote_to_manager(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, body = AppError, example = json!(AppError::example_404()))
    ),
    tag = "Users"
)]
#[put("/users/{id:\\d+}/last-login")]
pub async fn last_login(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service.record_login(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}
