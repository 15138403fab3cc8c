// Customer entity and its embedded address
//
// A customer owns its address outright. Credits are not held here: they
// point back at the customer by id and are reached through the credit store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Postal address embedded in a customer (no identity of its own)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

impl Address {
    pub fn new(zip_code: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            zip_code: zip_code.into(),
            street: street.into(),
        }
    }
}

/// Registered customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Assigned by the store on first save
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// Unique, never changed after creation
    pub cpf: String,
    /// Unique
    pub email: String,
    /// Argon2 PHC string
    #[serde(skip_serializing, default)]
    pub password: String,
    pub address: Address,
    pub income: Decimal,
}

impl Customer {
    /// Build a customer that has not been stored yet
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        cpf: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        address: Address,
        income: Decimal,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            cpf: cpf.into(),
            email: email.into(),
            password: password.into(),
            address,
            income,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
