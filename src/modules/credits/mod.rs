// Credits module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    Credit, CreditDto, CreditStatus, CreditView, CreditViewList, MAX_FIRST_INSTALLMENT_MONTHS,
    MAX_INSTALLMENTS,
};
pub use repositories::{CreditRepository, MySqlCreditRepository};
pub use services::CreditService;
