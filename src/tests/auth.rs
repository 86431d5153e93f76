use actix_web::http::StatusCode;
use rstest::*;
use serde::Deserialize;
use serde_json::json;

use crate::tests::utils::seed::{SEED_EMAIL, SEED_PASSWORD, seed_account};
use crate::tests::{Error, TestContext, context};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    id: i64,
    name: String,
    email: String,
    role: String,
    approved: bool,
    last_login: Option<String>,
    #[allow(dead_code)]
    created_at: String,
    #[allow(dead_code)]
    updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Login {
    message: String,
    id: i64,
    role: String,
    email: String,
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_success_register(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container, &context.cors)).await;

    let res = TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
                "name": "New Account",
                "email": "new_account@email.com",
                "password": "p4ssw0rd",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let acc: Account = test::read_body_json(res).await;

    assert!(acc.id > 0);
    assert_eq!(acc.name, "New Account");
    assert_eq!(acc.email, "new_account@email.com");
    assert_eq!(acc.role, "USER");
    assert!(!acc.approved);
    assert!(acc.last_login.is_none());

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_register_assigns_increasing_ids(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container, &context.cors)).await;

    let mut ids = Vec::new();

    for email in ["first@email.com", "second@email.com"] {
        let res = TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "name": "Someone",
                "email": email,
                "password": "p",
                "role": "ADMIN",
            }))
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let acc: Account = test::read_body_json(res).await;
        assert_eq!(acc.role, "ADMIN");
        ids.push(acc.id);
    }

    assert!(ids[1] > ids[0]);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_register_twice(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container, &context.cors)).await;

    let account = seed_account(&context.db.connection).await;

    let res = TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Another Name",
            "email": account.email,
            "password": "something-else",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::CONFLICT);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.code, 409);
    assert_eq!(err.error, "An account with this email already exists");

    let res = TestRequest::get()
        .uri(&format!("/api/users/by-email?email={SEED_EMAIL}"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let stored: Account = test::read_body_json(res).await;
    assert_eq!(stored.id, account.id);
    assert_eq!(stored.name, "Test Account");

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_success_login(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container, &context.cors)).await;

    let account = seed_account(&context.db.connection).await;

    let res = TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "email": account.email,
            "password": account.password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let login: Login = test::read_body_json(res).await;

    assert_eq!(login.message, "Login successful");
    assert_eq!(login.id, account.id);
    assert_eq!(login.role, "USER");
    assert_eq!(login.email, SEED_EMAIL);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[case::invalid_email("fake_account@email.com", SEED_PASSWORD)]
#[case::invalid_password(SEED_EMAIL, "p4ssw0rD")]
#[awt]
#[actix_web::test]
async fn test_invalid_login(
    #[future] context: TestContext,
    #[case] email: &str,
    #[case] password: &str,
) {
    let app = test::init_service(app::create(context.container, &context.cors)).await;

    seed_account(&context.db.connection).await;

    let res = TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "email": email,
            "password": password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, 401);
    assert_eq!(err.error, "Invalid credentials");

    let _ = context.db.container.stop().await;
}
