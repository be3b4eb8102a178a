use actix_web::{web, HttpResponse};

use ff_core::repositories::CustomerRepository;
use ff_core::services::token::TokenIssuer;
use ff_shared::{HealthResponse, HealthStatus, ServiceHealth};

use super::customer::AppState;

pub const SERVICE_NAME: &str = "fastfood-auth";

/// Handler for GET /health
///
/// Probes the database when one is configured. A failed probe reports
/// `degraded` but still answers 200 so the process is not restarted for a
/// storage outage.
pub async fn health_check<R, T>(state: web::Data<AppState<R, T>>) -> HttpResponse
where
    R: CustomerRepository + ?Sized + 'static,
    T: TokenIssuer + ?Sized + 'static,
{
    let mut health = HealthResponse::new(SERVICE_NAME, env!("CARGO_PKG_VERSION"));

    if let Some(database) = &state.database {
        let probe = match database.health_check().await {
            Ok(elapsed) => ServiceHealth::healthy(elapsed.as_millis() as u64),
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                ServiceHealth::unhealthy("database unreachable")
            }
        };
        health = health.with_service("database", probe);
    }

    if health.status != HealthStatus::Healthy {
        tracing::debug!(status = ?health.status, "Health check reported issues");
    }

    HttpResponse::Ok().json(health)
}
