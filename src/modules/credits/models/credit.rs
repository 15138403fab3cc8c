// Credit request entity
//
// A credit belongs to exactly one customer, referenced by id. The credit code
// is generated once at construction and never changes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credit request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    /// Submitted, awaiting analysis
    #[default]
    InProgress,
    Approved,
    Rejected,
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditStatus::InProgress => write!(f, "IN_PROGRESS"),
            CreditStatus::Approved => write!(f, "APPROVED"),
            CreditStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

impl std::str::FromStr for CreditStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(CreditStatus::InProgress),
            "APPROVED" => Ok(CreditStatus::Approved),
            "REJECTED" => Ok(CreditStatus::Rejected),
            _ => Err(format!("Invalid credit status: {}", s)),
        }
    }
}

/// Credit request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    /// Assigned by the store on first save
    pub id: Option<i64>,
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_of_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub status: CreditStatus,
    /// Owning customer. Required by `CreditService::save`.
    pub customer_id: Option<i64>,
}

impl Credit {
    /// New unsaved credit with a fresh code, status `IN_PROGRESS`
    pub fn new(
        credit_value: Decimal,
        day_of_first_installment: NaiveDate,
        number_of_installments: i32,
        customer_id: Option<i64>,
    ) -> Self {
        Self {
            id: None,
            credit_code: Uuid::new_v4(),
            credit_value,
            day_of_first_installment,
            number_of_installments,
            status: CreditStatus::InProgress,
            customer_id,
        }
    }

    /// True when the credit belongs to `customer_id`
    pub fn is_owned_by(&self, customer_id: i64) -> bool {
        self.customer_id == Some(customer_id)
    }
}
