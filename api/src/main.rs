use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use ff_api::config::Config;
use ff_api::{create_app, telemetry, AppState};
use ff_core::repositories::{CustomerRepository, InMemoryCustomerRepository};
use ff_core::services::token::JwtTokenIssuer;
use ff_infra::{DatabasePool, MySqlCustomerRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config.app.logging)
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialize tracing")?;

    for warning in config.app.warnings() {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        environment = %config.environment(),
        storage = %config.app.storage,
        "Starting FastFood auth server"
    );

    let token_issuer = Arc::new(
        JwtTokenIssuer::new(config.token.clone()).context("failed to build token issuer")?,
    );

    let (repository, database): (Arc<dyn CustomerRepository>, Option<DatabasePool>) =
        if config.uses_database() {
            tracing::info!(
                url = %config.app.database.redacted_url(),
                "Connecting to database"
            );
            let pool = DatabasePool::new(config.app.database.clone())
                .await
                .context("failed to create database pool")?;
            tracing::info!("{}", pool.statistics());
            let repository = MySqlCustomerRepository::new(pool.get_pool().clone());
            (Arc::new(repository), Some(pool))
        } else {
            (Arc::new(InMemoryCustomerRepository::new()), None)
        };

    let mut state = AppState::new(repository, token_issuer).with_environment(config.environment());
    if let Some(pool) = database.clone() {
        state = state.with_database(pool);
    }
    let app_state = web::Data::new(state);

    let bind_address = config.app.server.bind_address();
    tracing::info!("Server listening on http://{}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()))
        .keep_alive(std::time::Duration::from_secs(config.app.server.keep_alive))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?;

    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    server.run().await?;

    if let Some(pool) = database {
        pool.close().await;
    }
    tracing::info!("Server stopped");

    Ok(())
}
