// Customer service behaviour against the in-memory store, with store call
// counting to check that failed lookups never reach a write.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use credit_request_system::core::AppError;
use credit_request_system::customers::{Customer, CustomerService};
use credit_request_system::store::InMemoryStore;
use helpers::*;

fn counting_service() -> (CustomerService, Arc<CallCounts>) {
    let repo = CountingCustomerRepository::new(Arc::new(InMemoryStore::new()));
    let calls = repo.calls.clone();
    (CustomerService::new(Arc::new(repo)), calls)
}

#[tokio::test]
async fn should_create_customer() {
    let (service, calls) = counting_service();

    let actual = service.save(build_customer()).await.unwrap();

    assert_eq!(actual.id, Some(1));
    assert_eq!(actual.first_name, "Janio");
    assert_eq!(calls.saves(), 1);
}

#[tokio::test]
async fn should_find_customer_by_id() {
    let (service, calls) = counting_service();
    let saved = service.save(build_customer()).await.unwrap();

    let found = service.find_by_id(saved.id.unwrap()).await.unwrap();

    assert_eq!(found, saved);
    assert_eq!(calls.lookups(), 1);
}

#[tokio::test]
async fn should_not_find_customer_by_id() {
    let (service, calls) = counting_service();

    let err = service.find_by_id(77).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Id 77 not found");
    assert_eq!(calls.lookups(), 1);
    assert_eq!(calls.saves(), 0);
    assert_eq!(calls.deletes(), 0);
}

#[tokio::test]
async fn should_delete_customer_by_id() {
    let (service, calls) = counting_service();
    let saved = service.save(build_customer()).await.unwrap();
    let id = saved.id.unwrap();

    service.delete(id).await.unwrap();

    assert_eq!(calls.lookups(), 1);
    assert_eq!(calls.deletes(), 1);
    assert!(matches!(
        service.find_by_id(id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn should_not_delete_missing_customer() {
    let (service, calls) = counting_service();

    let err = service.delete(5).await.unwrap_err();

    assert_eq!(err.to_string(), "Id 5 not found");
    assert_eq!(calls.lookups(), 1);
    assert_eq!(calls.deletes(), 0);
}

#[tokio::test]
async fn should_update_only_profile_fields() {
    let (service, _) = counting_service();
    let saved = service.save(build_customer()).await.unwrap();
    let id = saved.id.unwrap();
    let patch = build_update_dto();

    let returned = service.update(id, patch.clone()).await.unwrap();
    let reread = service.find_by_id(id).await.unwrap();

    assert_eq!(returned, reread);
    assert_eq!(reread.first_name, patch.first_name);
    assert_eq!(reread.last_name, patch.last_name);
    assert_eq!(reread.income, patch.income);
    assert_eq!(reread.address.street, patch.street);
    assert_eq!(reread.address.zip_code, patch.zip_code);

    assert_eq!(reread.id, saved.id);
    assert_eq!(reread.cpf, saved.cpf);
    assert_eq!(reread.email, saved.email);
    assert_eq!(reread.password, saved.password);
}

#[tokio::test]
async fn should_not_update_missing_customer() {
    let (service, calls) = counting_service();

    let err = service.update(3, build_update_dto()).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(calls.saves(), 0);
}

#[tokio::test]
async fn should_reject_duplicate_cpf() {
    let (service, _) = counting_service();
    service.save(build_customer()).await.unwrap();

    let duplicate = Customer {
        email: "other@gmail.com".to_string(),
        ..build_customer()
    };
    let err = service.save(duplicate).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn reference_customer_lifecycle() {
    let (service, _) = counting_service();

    let saved = service.save(build_customer()).await.unwrap();
    assert_eq!(saved.id, Some(1));
    assert_eq!(service.find_by_id(1).await.unwrap(), saved);

    service.delete(1).await.unwrap();

    let err = service.find_by_id(1).await.unwrap_err();
    assert_eq!(err.to_string(), "Id 1 not found");
}

#[tokio::test]
async fn should_not_resave_a_stored_customer() {
    let (service, calls) = counting_service();
    let saved = service.save(build_customer()).await.unwrap();

    let resaved = Customer {
        cpf: VALID_CPFS[1].to_string(),
        email: "x@y.com".to_string(),
        password: "other".to_string(),
        ..saved.clone()
    };
    let err = service.save(resaved).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(calls.saves(), 1);
    assert_eq!(service.find_by_id(saved.id.unwrap()).await.unwrap(), saved);
}

#[tokio::test]
async fn should_keep_cpf_across_updates() {
    let (service, _) = counting_service();
    let saved = service.save(build_customer()).await.unwrap();
    let id = saved.id.unwrap();

    service.update(id, build_update_dto()).await.unwrap();
    let mut patch = build_update_dto();
    patch.first_name = "Second".to_string();
    service.update(id, patch).await.unwrap();

    let reread = service.find_by_id(id).await.unwrap();
    assert_eq!(reread.first_name, "Second");
    assert_eq!(reread.cpf, saved.cpf);
    assert_eq!(reread.email, saved.email);
}
