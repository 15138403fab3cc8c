use std::sync::Arc;

use crate::core::{AppError, Repository, Result};
use crate::modules::customers::models::{Customer, CustomerUpdateDto};
use crate::modules::customers::repositories::CustomerRepository;

/// Service for customer business logic
///
/// Every operation is a single store call or a lookup followed by one write.
pub struct CustomerService {
    customer_repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    /// Persist a new customer. Uniqueness of cpf and email is left to the store.
    ///
    /// Changes to a stored customer go through `update`, so a customer that
    /// already has an id is refused with `Validation`.
    pub async fn save(&self, customer: Customer) -> Result<Customer> {
        if let Some(id) = customer.id {
            return Err(AppError::validation(format!(
                "Customer {} already exists, use update instead",
                id
            )));
        }

        let saved = self.customer_repo.save(customer).await?;

        tracing::info!(customer_id = ?saved.id, "Customer saved");
        Ok(saved)
    }

    /// Load a customer or fail with `NotFound("Id {id} not found")`
    pub async fn find_by_id(&self, id: i64) -> Result<Customer> {
        self.customer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Id {} not found", id)))
    }

    /// Replace names, income and address of an existing customer
    pub async fn update(&self, id: i64, patch: CustomerUpdateDto) -> Result<Customer> {
        let previous = self.find_by_id(id).await?;
        let updated = self.customer_repo.save(patch.to_entity(previous)).await?;

        tracing::info!(customer_id = id, "Customer updated");
        Ok(updated)
    }

    /// Remove a customer. Its credits are removed with it by the store.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let customer = self.find_by_id(id).await?;
        self.customer_repo.delete(customer).await?;

        tracing::info!(customer_id = id, "Customer deleted");
        Ok(())
    }
}
