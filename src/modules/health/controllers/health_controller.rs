use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    /// "up", "down" or "in_memory"
    pub store: String,
}

/// GET /health - Liveness probe
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe
/// Pings MySQL when that backend is in use; the in-memory store is always ready
pub async fn readiness_check(pool: Option<web::Data<MySqlPool>>) -> impl Responder {
    let (ready, store) = match pool {
        None => (true, "in_memory"),
        Some(pool) => match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
            Ok(_) => (true, "up"),
            Err(e) => {
                tracing::error!("Database readiness check failed: {}", e);
                (false, "down")
            }
        },
    };

    let response = ReadinessResponse {
        ready,
        store: store.to_string(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
