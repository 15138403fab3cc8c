// CustomerRepository: store contract for customers plus its MySQL adapter
//
// Implements:
// - Insert a new customer (id assigned by AUTO_INCREMENT)
// - Update an existing customer's mutable columns (cpf is never rewritten)
// - Find by id
// - Delete (credits go with it through ON DELETE CASCADE)

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::{AppError, Repository, Result};
use crate::modules::customers::models::{Address, Customer};

/// Store contract for customers
pub trait CustomerRepository: Repository<Customer, i64> {}

/// MySQL-backed customer store
#[derive(Clone)]
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, customer: Customer) -> Result<Customer> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (
                first_name, last_name, cpf, email, password, zip_code, street, income
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.cpf)
        .bind(&customer.email)
        .bind(&customer.password)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .bind(customer.income)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "Customer with this cpf or email"))?;

        Ok(Customer {
            id: Some(result.last_insert_id() as i64),
            ..customer
        })
    }

    async fn update(&self, id: i64, customer: Customer) -> Result<Customer> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = ?, last_name = ?, email = ?, password = ?,
                zip_code = ?, street = ?, income = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.password)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .bind(customer.income)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "Customer with this email"))?;

        // MySQL reports 0 affected rows when nothing changed, so re-check existence
        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(format!("Id {} not found", id)));
        }

        Ok(customer)
    }
}

#[async_trait]
impl Repository<Customer, i64> for MySqlCustomerRepository {
    async fn save(&self, customer: Customer) -> Result<Customer> {
        match customer.id {
            None => self.insert(customer).await,
            Some(id) => self.update(id, customer).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, cpf, email, password, zip_code, street, income
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn delete(&self, customer: Customer) -> Result<()> {
        let id = customer
            .id
            .ok_or_else(|| AppError::validation("Cannot delete a customer without an id"))?;

        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl CustomerRepository for MySqlCustomerRepository {}

/// Row shape of the customers table
#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    cpf: String,
    email: String,
    password: String,
    zip_code: String,
    street: String,
    income: Decimal,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            cpf: row.cpf,
            email: row.email,
            password: row.password,
            address: Address {
                zip_code: row.zip_code,
                street: row.street,
            },
            income: row.income,
        }
    }
}
