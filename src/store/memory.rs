//! In-memory store
//!
//! One arena holds both tables, keyed by id, so that deleting a customer can
//! take its credits along the way the MySQL foreign key does. Used by the
//! `memory` backend and by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::{AppError, Repository, Result};
use crate::modules::credits::models::Credit;
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::customers::models::Customer;
use crate::modules::customers::repositories::CustomerRepository;

#[derive(Debug, Default)]
struct Arena {
    customers: BTreeMap<i64, Customer>,
    credits: BTreeMap<i64, Credit>,
    last_customer_id: i64,
    last_credit_id: i64,
}

impl Arena {
    fn check_customer_unique(&self, candidate: &Customer) -> Result<()> {
        let clash = self.customers.values().any(|existing| {
            existing.id != candidate.id
                && (existing.cpf == candidate.cpf || existing.email == candidate.email)
        });
        if clash {
            return Err(AppError::conflict("Customer with this cpf or email already exists"));
        }
        Ok(())
    }
}

/// Store implementing both repository contracts over a shared arena
#[derive(Debug, Default)]
pub struct InMemoryStore {
    arena: RwLock<Arena>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Customer, i64> for InMemoryStore {
    async fn save(&self, customer: Customer) -> Result<Customer> {
        let mut arena = self.arena.write().await;
        arena.check_customer_unique(&customer)?;

        let customer = match customer.id {
            None => {
                arena.last_customer_id += 1;
                Customer {
                    id: Some(arena.last_customer_id),
                    ..customer
                }
            }
            Some(id) => {
                let previous = arena
                    .customers
                    .get(&id)
                    .ok_or_else(|| AppError::not_found(format!("Id {} not found", id)))?;
                // cpf is fixed at creation
                Customer {
                    cpf: previous.cpf.clone(),
                    ..customer
                }
            }
        };

        if let Some(id) = customer.id {
            arena.customers.insert(id, customer.clone());
        }
        Ok(customer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        Ok(self.arena.read().await.customers.get(&id).cloned())
    }

    async fn delete(&self, customer: Customer) -> Result<()> {
        let id = customer
            .id
            .ok_or_else(|| AppError::validation("Cannot delete a customer without an id"))?;

        let mut arena = self.arena.write().await;
        arena.customers.remove(&id);
        arena
            .credits
            .retain(|_, credit| credit.customer_id != Some(id));
        Ok(())
    }
}

impl CustomerRepository for InMemoryStore {}

#[async_trait]
impl Repository<Credit, i64> for InMemoryStore {
    async fn save(&self, credit: Credit) -> Result<Credit> {
        if let Some(id) = credit.id {
            return Err(AppError::validation(format!(
                "Credit {} already exists and cannot be changed",
                id
            )));
        }

        let mut arena = self.arena.write().await;

        let owner = credit
            .customer_id
            .ok_or_else(|| AppError::validation("Credit must reference a customer"))?;
        if !arena.customers.contains_key(&owner) {
            return Err(AppError::validation(format!(
                "Customer {} does not exist",
                owner
            )));
        }

        let code_taken = arena
            .credits
            .values()
            .any(|existing| existing.credit_code == credit.credit_code);
        if code_taken {
            return Err(AppError::conflict("Credit with this code already exists"));
        }

        arena.last_credit_id += 1;
        let id = arena.last_credit_id;
        let credit = Credit {
            id: Some(id),
            ..credit
        };

        arena.credits.insert(id, credit.clone());
        Ok(credit)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Credit>> {
        Ok(self.arena.read().await.credits.get(&id).cloned())
    }

    async fn delete(&self, credit: Credit) -> Result<()> {
        let id = credit
            .id
            .ok_or_else(|| AppError::validation("Cannot delete a credit without an id"))?;

        self.arena.write().await.credits.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CreditRepository for InMemoryStore {
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        Ok(self
            .arena
            .read()
            .await
            .credits
            .values()
            .filter(|credit| credit.customer_id == Some(customer_id))
            .cloned()
            .collect())
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        Ok(self
            .arena
            .read()
            .await
            .credits
            .values()
            .find(|credit| credit.credit_code == credit_code)
            .cloned())
    }
}
