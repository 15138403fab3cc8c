use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::customers::models::{CustomerDto, CustomerUpdateDto, CustomerView};
use crate::modules::customers::services::CustomerService;

/// `?customerId=` query parameter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIdQuery {
    pub customer_id: i64,
}

/// Register a customer
/// POST /api/customers
pub async fn save_customer(
    service: web::Data<Arc<CustomerService>>,
    request: web::Json<CustomerDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let customer = service.save(request.to_entity()?).await?;

    Ok(HttpResponse::Created().body(format!("Customer {} saved!", customer.email)))
}

/// Get customer by ID
/// GET /api/customers/{id}
pub async fn find_by_id(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let customer = service.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(CustomerView::from(customer)))
}

/// Patch a customer's profile
/// PATCH /api/customers?customerId={id}
pub async fn update_customer(
    service: web::Data<Arc<CustomerService>>,
    query: web::Query<CustomerIdQuery>,
    request: web::Json<CustomerUpdateDto>,
) -> Result<HttpResponse, AppError> {
    let patch = request.into_inner();
    patch.validate()?;

    let customer = service.update(query.customer_id, patch).await?;

    Ok(HttpResponse::Ok().json(CustomerView::from(customer)))
}

/// Delete a customer and its credits
/// DELETE /api/customers/{id}
pub async fn delete_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/customers")
            .route("", web::post().to(save_customer))
            .route("", web::patch().to(update_customer))
            .route("/{id}", web::get().to(find_by_id))
            .route("/{id}", web::delete().to(delete_customer)),
    );
}
