//! Service wiring shared by the binary and the HTTP tests

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::modules::credits::{self, CreditService, MySqlCreditRepository};
use crate::modules::customers::{self, CustomerService, MySqlCustomerRepository};
use crate::middleware::error_handler;
use crate::modules::health;
use crate::store::InMemoryStore;

/// The two services, wired against one store
#[derive(Clone)]
pub struct AppServices {
    pub customers: Arc<CustomerService>,
    pub credits: Arc<CreditService>,
}

impl AppServices {
    /// Services backed by MySQL
    pub fn mysql(pool: MySqlPool) -> Self {
        let customers = Arc::new(CustomerService::new(Arc::new(
            MySqlCustomerRepository::new(pool.clone()),
        )));
        let credits = Arc::new(CreditService::new(
            Arc::new(MySqlCreditRepository::new(pool)),
            customers.clone(),
        ));

        Self { customers, credits }
    }

    /// Services backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let customers = Arc::new(CustomerService::new(store.clone()));
        let credits = Arc::new(CreditService::new(store, customers.clone()));

        Self { customers, credits }
    }

    /// Register the services as app data, the extractor error handlers and
    /// every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.configure(error_handler::configure)
            .app_data(web::Data::new(self.customers.clone()))
            .app_data(web::Data::new(self.credits.clone()))
            .configure(health::controllers::configure)
            .configure(customers::controllers::configure)
            .configure(credits::controllers::configure);
    }
}
