use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use credit_request_system::config::{Config, DatabaseConfig, StoreBackend};
use credit_request_system::middleware::RequestId;
use credit_request_system::AppServices;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "credit_request_system={},actix_web=info",
                    config.app.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Credit Request System");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Store backend: {}", config.app.store_backend);

    let (services, pool) = match config.app.store_backend {
        StoreBackend::MySql => {
            let pool = config
                .database
                .create_pool()
                .await
                .context("Failed to create database pool")?;
            DatabaseConfig::run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;

            tracing::info!(
                "Database pool initialized ({} connections)",
                config.database.pool_size
            );
            (AppServices::mysql(pool.clone()), Some(pool))
        }
        StoreBackend::Memory => (AppServices::in_memory(), None),
    };

    let bind_address = config.server.bind_address();
    tracing::info!("Server binding to: {}", bind_address);

    let server = HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Cors::permissive())
            .wrap(RequestId)
            .wrap(TracingLogger::default());
        if let Some(pool) = &pool {
            app = app.app_data(web::Data::new(pool.clone()));
        }
        app.configure(|cfg| services.configure(cfg))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
