// Contract tests for /api/credits against the in-memory backend

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, App};
use credit_request_system::credits::{CreditView, CreditViewList};
use credit_request_system::AppServices;
use helpers::*;
use rust_decimal_macros::dec;

macro_rules! init_app {
    () => {{
        let services = AppServices::in_memory();
        let app =
            test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;
        (app, services)
    }};
}

/// Seeds the reference customer and one credit, returning the credit code
async fn seed(services: &AppServices) -> (i64, uuid::Uuid) {
    let customer = services.customers.save(build_customer()).await.unwrap();
    let customer_id = customer.id.unwrap();
    let credit = services
        .credits
        .save(build_credit(Some(customer_id)))
        .await
        .unwrap();
    (customer_id, credit.credit_code)
}

#[actix_web::test]
async fn test_create_credit_returns_201() {
    let (app, services) = init_app!();
    let customer = services.customers.save(build_customer()).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/credits")
        .set_json(build_credit_dto(customer.id.unwrap()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.starts_with("Credit "));
    assert!(text.ends_with(" - Customer janinho@gmail.com saved!"));
}

#[actix_web::test]
async fn test_create_credit_for_unknown_customer_returns_404() {
    let (app, _) = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/credits")
        .set_json(build_credit_dto(99))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_credit_with_too_many_installments_returns_400() {
    let (app, services) = init_app!();
    let customer = services.customers.save(build_customer()).await.unwrap();
    let mut dto = build_credit_dto(customer.id.unwrap());
    dto.number_of_installments = 49;

    let req = test::TestRequest::post()
        .uri("/api/credits")
        .set_json(dto)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_credits_by_customer() {
    let (app, services) = init_app!();
    let (customer_id, code) = seed(&services).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/credits?customerId={}", customer_id))
        .to_request();
    let list: Vec<CreditViewList> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].credit_code, code);
    assert_eq!(list[0].credit_value, dec!(500.00));
    assert_eq!(list[0].number_of_installments, 12);
}

#[actix_web::test]
async fn test_get_credit_for_owner() {
    let (app, services) = init_app!();
    let (customer_id, code) = seed(&services).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/credits/{}?customerId={}", code, customer_id))
        .to_request();
    let view: CreditView = test::call_and_read_body_json(&app, req).await;

    assert_eq!(view.credit_code, code);
    assert_eq!(view.email_customer, "janinho@gmail.com");
    assert_eq!(view.income_customer, dec!(1000.00));
}

#[actix_web::test]
async fn test_get_credit_for_other_customer_returns_403() {
    let (app, services) = init_app!();
    let (customer_id, code) = seed(&services).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/credits/{}?customerId={}", code, customer_id + 1))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Contact admin");
}

#[actix_web::test]
async fn test_get_unknown_credit_returns_404() {
    let (app, services) = init_app!();
    let (customer_id, _) = seed(&services).await;

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/credits/{}?customerId={}",
            random_code(),
            customer_id
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_non_uuid_credit_code_returns_400_error_body() {
    let (app, _) = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/credits/not-a-uuid?customerId=1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_non_numeric_customer_id_returns_400_error_body() {
    let (app, _) = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/credits?customerId=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid query string"));
}
