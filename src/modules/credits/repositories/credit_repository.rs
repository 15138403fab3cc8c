// CreditRepository: store contract for credits plus its MySQL adapter
//
// Implements:
// - Insert a credit (no update: credits are fixed once stored)
// - Find by id and by credit code
// - List every credit of a customer, oldest first
// - Delete

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};
use uuid::Uuid;

use crate::core::{AppError, Repository, Result};
use crate::modules::credits::models::{Credit, CreditStatus};

/// Store contract for credits
#[async_trait]
pub trait CreditRepository: Repository<Credit, i64> {
    /// All credits whose owner is `customer_id`, ordered by id
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>>;

    /// The credit with this code, if any
    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>>;
}

/// MySQL-backed credit store
#[derive(Clone)]
pub struct MySqlCreditRepository {
    pool: MySqlPool,
}

const SELECT_CREDIT: &str = r#"
    SELECT id, credit_code, credit_value, day_first_installment,
           number_of_installments, status, customer_id
    FROM credits
"#;

impl MySqlCreditRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, credit: Credit) -> Result<Credit> {
        let result = sqlx::query(
            r#"
            INSERT INTO credits (
                credit_code, credit_value, day_first_installment,
                number_of_installments, status, customer_id
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(credit.credit_code.to_string())
        .bind(credit.credit_value)
        .bind(credit.day_of_first_installment)
        .bind(credit.number_of_installments)
        .bind(credit.status.to_string())
        .bind(credit.customer_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "Credit with this code"))?;

        Ok(Credit {
            id: Some(result.last_insert_id() as i64),
            ..credit
        })
    }
}

#[async_trait]
impl Repository<Credit, i64> for MySqlCreditRepository {
    /// Insert only. A stored credit is never rewritten.
    async fn save(&self, credit: Credit) -> Result<Credit> {
        if let Some(id) = credit.id {
            return Err(AppError::validation(format!(
                "Credit {} already exists and cannot be changed",
                id
            )));
        }
        self.insert(credit).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Credit>> {
        let row = sqlx::query_as::<_, CreditRow>(&format!("{} WHERE id = ?", SELECT_CREDIT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Credit::try_from).transpose()
    }

    async fn delete(&self, credit: Credit) -> Result<()> {
        let id = credit
            .id
            .ok_or_else(|| AppError::validation("Cannot delete a credit without an id"))?;

        sqlx::query("DELETE FROM credits WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl CreditRepository for MySqlCreditRepository {
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let rows = sqlx::query_as::<_, CreditRow>(&format!(
            "{} WHERE customer_id = ? ORDER BY id ASC",
            SELECT_CREDIT
        ))
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Credit::try_from).collect()
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        let row = sqlx::query_as::<_, CreditRow>(&format!(
            "{} WHERE credit_code = ?",
            SELECT_CREDIT
        ))
        .bind(credit_code.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Credit::try_from).transpose()
    }
}

/// Row shape of the credits table. Code and status are stored as text.
#[derive(Debug, FromRow)]
struct CreditRow {
    id: i64,
    credit_code: String,
    credit_value: Decimal,
    day_first_installment: NaiveDate,
    number_of_installments: i32,
    status: String,
    customer_id: i64,
}

impl TryFrom<CreditRow> for Credit {
    type Error = AppError;

    fn try_from(row: CreditRow) -> Result<Self> {
        let credit_code = Uuid::parse_str(&row.credit_code)
            .map_err(|e| AppError::internal(format!("Corrupt credit code: {}", e)))?;
        let status: CreditStatus = row.status.parse().map_err(AppError::Internal)?;

        Ok(Credit {
            id: Some(row.id),
            credit_code,
            credit_value: row.credit_value,
            day_of_first_installment: row.day_first_installment,
            number_of_installments: row.number_of_installments,
            status,
            customer_id: Some(row.customer_id),
        })
    }
}
