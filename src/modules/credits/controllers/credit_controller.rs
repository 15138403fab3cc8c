use std::sync::Arc;

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::credits::models::{CreditDto, CreditView, CreditViewList};
use crate::modules::credits::services::CreditService;
use crate::modules::customers::controllers::CustomerIdQuery;
use crate::modules::customers::services::CustomerService;

/// Submit a credit request
/// POST /api/credits
pub async fn save_credit(
    credits: web::Data<Arc<CreditService>>,
    customers: web::Data<Arc<CustomerService>>,
    request: web::Json<CreditDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let credit = credits.save(request.to_entity()).await?;
    let owner_id = credit
        .customer_id
        .ok_or_else(|| AppError::internal("Stored credit has no customer"))?;
    let customer = customers.find_by_id(owner_id).await?;

    Ok(HttpResponse::Created().body(format!(
        "Credit {} - Customer {} saved!",
        credit.credit_code, customer.email
    )))
}

/// List a customer's credits
/// GET /api/credits?customerId={id}
pub async fn find_all_by_customer_id(
    credits: web::Data<Arc<CreditService>>,
    query: web::Query<CustomerIdQuery>,
) -> Result<HttpResponse, AppError> {
    let list: Vec<CreditViewList> = credits
        .find_all_by_customer_id(query.customer_id)
        .await?
        .into_iter()
        .map(CreditViewList::from)
        .collect();

    Ok(HttpResponse::Ok().json(list))
}

/// Get one credit, only for its owner
/// GET /api/credits/{creditCode}?customerId={id}
pub async fn find_by_credit_code(
    credits: web::Data<Arc<CreditService>>,
    customers: web::Data<Arc<CustomerService>>,
    path: web::Path<Uuid>,
    query: web::Query<CustomerIdQuery>,
) -> Result<HttpResponse, AppError> {
    let credit = credits
        .find_by_credit_code(query.customer_id, path.into_inner())
        .await?;
    let customer = customers.find_by_id(query.customer_id).await?;

    Ok(HttpResponse::Ok().json(CreditView::new(credit, &customer)))
}

/// Configure credit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/credits")
            .route("", web::post().to(save_credit))
            .route("", web::get().to(find_all_by_customer_id))
            .route("/{credit_code}", web::get().to(find_by_credit_code)),
    );
}
