use crate::core::{AppError, Result};
use serde::Deserialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Read the pool settings. `DATABASE_URL` is only mandatory when `required`.
    pub fn from_env(required: bool) -> Result<Self> {
        let url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) if !required => String::new(),
            Err(_) => {
                return Err(AppError::Configuration("DATABASE_URL not set".to_string()));
            }
        };

        Ok(DatabaseConfig {
            url,
            pool_size: env::var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_POOL_SIZE".to_string())
                })?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_MAX_CONNECTIONS".to_string())
                })?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(AppError::Configuration("DATABASE_URL not set".to_string()));
        }
        if self.pool_size == 0 {
            return Err(AppError::Configuration(
                "DATABASE_POOL_SIZE must be greater than 0".to_string(),
            ));
        }
        if self.max_connections < self.pool_size {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be at least DATABASE_POOL_SIZE".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a MySQL connection pool
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .test_before_acquire(true)
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }

    /// Apply the bundled schema migrations
    pub async fn run_migrations(pool: &MySqlPool) -> Result<()> {
        sqlx::migrate!("./migrations").run(pool).await?;
        Ok(())
    }
}
