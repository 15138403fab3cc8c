use std::sync::Arc;

use uuid::Uuid;

use crate::core::{AppError, Repository, Result};
use crate::modules::credits::models::Credit;
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::customers::services::CustomerService;

/// Service for credit request business logic
///
/// Credits are created against an existing customer and read back only
/// through an ownership check.
pub struct CreditService {
    credit_repo: Arc<dyn CreditRepository>,
    customer_service: Arc<CustomerService>,
}

impl CreditService {
    pub fn new(
        credit_repo: Arc<dyn CreditRepository>,
        customer_service: Arc<CustomerService>,
    ) -> Self {
        Self {
            credit_repo,
            customer_service,
        }
    }

    /// Persist a new credit for the customer it references
    ///
    /// Credits never change once stored, so a credit that already has an id
    /// is refused.
    ///
    /// # Errors
    /// * `Validation` - the credit already has an id, or carries no customer
    ///   id (no store call is made in either case)
    /// * `NotFound` - the referenced customer does not exist
    pub async fn save(&self, credit: Credit) -> Result<Credit> {
        if let Some(id) = credit.id {
            return Err(AppError::validation(format!(
                "Credit {} already exists and cannot be changed",
                id
            )));
        }

        let customer_id = credit
            .customer_id
            .ok_or_else(|| AppError::validation("Credit must reference a customer"))?;

        let customer = self.customer_service.find_by_id(customer_id).await?;
        let credit = Credit {
            customer_id: customer.id,
            ..credit
        };

        let saved = self.credit_repo.save(credit).await?;

        tracing::info!(
            customer_id = customer_id,
            credit_code = %saved.credit_code,
            "Credit saved"
        );
        Ok(saved)
    }

    /// Every credit of a customer, empty when there are none
    pub async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        self.credit_repo.find_all_by_customer_id(customer_id).await
    }

    /// Look a credit up by code, then check it belongs to `customer_id`
    ///
    /// # Errors
    /// * `NotFound` - no credit has this code
    /// * `Forbidden` - the credit belongs to another customer
    pub async fn find_by_credit_code(&self, customer_id: i64, credit_code: Uuid) -> Result<Credit> {
        let credit = self
            .credit_repo
            .find_by_credit_code(credit_code)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Creditcode {} not found", credit_code)))?;

        if !credit.is_owned_by(customer_id) {
            tracing::warn!(
                customer_id = customer_id,
                credit_code = %credit_code,
                "Credit requested by a customer who does not own it"
            );
            return Err(AppError::forbidden("Contact admin"));
        }

        Ok(credit)
    }
}
