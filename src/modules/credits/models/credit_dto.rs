use chrono::{Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::credit::{Credit, CreditStatus};
use crate::core::money::validate_scale;
use crate::core::{AppError, Result};
use crate::modules::customers::models::Customer;

/// Longest allowed installment plan
pub const MAX_INSTALLMENTS: i32 = 48;

/// Furthest the first installment may be pushed out, in months
pub const MAX_FIRST_INSTALLMENT_MONTHS: u32 = 3;

/// Credit request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditDto {
    pub credit_value: Decimal,
    pub day_first_of_installment: NaiveDate,
    pub number_of_installments: i32,
    pub customer_id: Option<i64>,
}

impl CreditDto {
    pub fn validate(&self) -> Result<()> {
        self.validate_on(Utc::now().date_naive())
    }

    /// Validate against a given "today"
    pub fn validate_on(&self, today: NaiveDate) -> Result<()> {
        if self.credit_value <= Decimal::ZERO {
            return Err(AppError::validation("creditValue must be positive"));
        }
        validate_scale("creditValue", self.credit_value)?;

        if self.day_first_of_installment <= today {
            return Err(AppError::validation(
                "dayFirstOfInstallment must be in the future",
            ));
        }

        let latest = today
            .checked_add_months(Months::new(MAX_FIRST_INSTALLMENT_MONTHS))
            .ok_or_else(|| AppError::internal("Date out of range"))?;
        if self.day_first_of_installment > latest {
            return Err(AppError::validation(format!(
                "dayFirstOfInstallment must be at most {} months ahead",
                MAX_FIRST_INSTALLMENT_MONTHS
            )));
        }

        if !(1..=MAX_INSTALLMENTS).contains(&self.number_of_installments) {
            return Err(AppError::validation(format!(
                "numberOfInstallments must be between 1 and {}",
                MAX_INSTALLMENTS
            )));
        }

        if self.customer_id.is_none() {
            return Err(AppError::validation("customerId is required"));
        }

        Ok(())
    }

    pub fn to_entity(&self) -> Credit {
        Credit::new(
            self.credit_value,
            self.day_first_of_installment,
            self.number_of_installments,
            self.customer_id,
        )
    }
}

/// Full credit view, returned by the ownership-checked lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditView {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub number_of_installment: i32,
    pub status: CreditStatus,
    pub email_customer: String,
    pub income_customer: Decimal,
}

impl CreditView {
    pub fn new(credit: Credit, customer: &Customer) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installment: credit.number_of_installments,
            status: credit.status,
            email_customer: customer.email.clone(),
            income_customer: customer.income,
        }
    }
}

/// Summary row for a customer's credit listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditViewList {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub number_of_installments: i32,
}

impl From<Credit> for CreditViewList {
    fn from(credit: Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
        }
    }
}
