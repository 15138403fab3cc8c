// Request and response shapes for the customer endpoints
//
// CustomerDto carries a registration, CustomerUpdateDto a profile patch and
// CustomerView what the API returns. The mapping functions build new entity
// values and never touch the input entity in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::customer::{Address, Customer};
use crate::core::money::validate_scale;
use crate::core::password::hash_password;
use crate::core::{AppError, Result};

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub password: String,
    pub zip_code: String,
    pub street: String,
}

impl CustomerDto {
    /// Check field-level rules before anything reaches the store
    pub fn validate(&self) -> Result<()> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        if !is_valid_cpf(&self.cpf) {
            return Err(AppError::validation("Invalid CPF"));
        }
        if !is_valid_email(&self.email) {
            return Err(AppError::validation("Invalid email"));
        }
        require_text("password", &self.password)?;
        require_non_negative("income", self.income)?;
        require_text("zipCode", &self.zip_code)?;
        require_text("street", &self.street)?;
        Ok(())
    }

    /// Build a new, unsaved customer. The password is hashed here.
    pub fn to_entity(self) -> Result<Customer> {
        let password = hash_password(&self.password)?;

        Ok(Customer::new(
            self.first_name,
            self.last_name,
            self.cpf,
            self.email,
            password,
            Address::new(self.zip_code, self.street),
            self.income,
        ))
    }
}

/// Profile patch: only names, income and address may change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateDto {
    pub first_name: String,
    pub last_name: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl CustomerUpdateDto {
    pub fn validate(&self) -> Result<()> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_non_negative("income", self.income)?;
        require_text("zipCode", &self.zip_code)?;
        require_text("street", &self.street)?;
        Ok(())
    }

    /// New customer value from `previous` with the patched fields replaced.
    /// id, cpf, email and password carry over untouched.
    pub fn to_entity(&self, previous: Customer) -> Customer {
        Customer {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            income: self.income,
            address: Address::new(self.zip_code.clone(), self.street.clone()),
            ..previous
        }
    }
}

/// Customer as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub zip_code: String,
    pub street: String,
    pub id: Option<i64>,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            first_name: customer.first_name,
            last_name: customer.last_name,
            cpf: customer.cpf,
            income: customer.income,
            email: customer.email,
            zip_code: customer.address.zip_code,
            street: customer.address.street,
            id: customer.id,
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "{} must not be negative",
            field
        )));
    }
    validate_scale(field, value)
}

/// 11 digits, not all equal, both check digits correct
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = match cpf.chars().map(|c| c.to_digit(10)).collect() {
        Some(digits) => digits,
        None => return false,
    };
    if digits.len() != 11 || digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let check_digit = |len: usize| -> u32 {
        let sum: u32 = digits[..len]
            .iter()
            .zip((2..=len as u32 + 1).rev())
            .map(|(d, weight)| d * weight)
            .sum();
        match sum % 11 {
            0 | 1 => 0,
            r => 11 - r,
        }
    };

    check_digit(9) == digits[9] && check_digit(10) == digits[10]
}

/// Loose shape check: something@something.something
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .rsplit_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
            .unwrap_or(false)
        && !email.chars().any(char::is_whitespace)
}
