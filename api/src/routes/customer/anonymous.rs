use actix_web::{web, HttpResponse};

use ff_core::repositories::CustomerRepository;
use ff_core::services::token::TokenIssuer;

use super::AppState;
use crate::dto::CustomerTokenResponse;
use crate::handlers::handle_domain_error;

/// Handler for POST /api/customer/anonymous
///
/// Creates a customer without any identifying data and returns its token.
///
/// ```json
/// {
///     "token": "eyJhbGciOiJIUzI1NiJ9...",
///     "customerId": "550e8400-e29b-41d4-a716-446655440000",
///     "expiresAt": "2026-01-02T10:00:00Z",
///     "expiresIn": 86400
/// }
/// ```
pub async fn create_anonymous<R, T>(state: web::Data<AppState<R, T>>) -> HttpResponse
where
    R: CustomerRepository + ?Sized + 'static,
    T: TokenIssuer + ?Sized + 'static,
{
    match state.create_anonymous.execute().await {
        Ok(token) => {
            tracing::info!(customer_id = %token.customer_id, "Anonymous customer created");
            HttpResponse::Ok().json(CustomerTokenResponse::from(token))
        }
        Err(error) => handle_domain_error(error, state.environment),
    }
}
