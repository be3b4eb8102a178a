use actix_web::{web, HttpResponse};

use ff_core::repositories::CustomerRepository;
use ff_core::services::token::TokenIssuer;

use super::{masked_cpf, validate_request, AppState};
use crate::dto::{CpfRequest, CustomerTokenResponse};
use crate::handlers::handle_domain_error;

/// Handler for POST /api/customer/register
///
/// Registers the CPF, or reuses the customer already registered with it.
///
/// # Request Body
///
/// ```json
/// { "cpf": "111.444.777-35" }
/// ```
///
/// # Errors
///
/// * 400 `VALIDATION_ERROR` - body missing or `cpf` longer than 64 characters
/// * 400 `REQUIRED_FIELD`, `INVALID_FORMAT`, `INVALID_CHECK_DIGIT` - CPF rejected
/// * 409 `CONFLICT` - concurrent registration could not be resolved
pub async fn register<R, T>(
    state: web::Data<AppState<R, T>>,
    request: web::Json<CpfRequest>,
) -> HttpResponse
where
    R: CustomerRepository + ?Sized + 'static,
    T: TokenIssuer + ?Sized + 'static,
{
    if let Err(response) = validate_request(&request) {
        return response;
    }

    let cpf = masked_cpf(&request.cpf);
    tracing::debug!(cpf = %cpf, "Processing register request");

    match state.register.execute(&request.cpf).await {
        Ok(token) => {
            tracing::info!(customer_id = %token.customer_id, cpf = %cpf, "Customer registered");
            HttpResponse::Ok().json(CustomerTokenResponse::from(token))
        }
        Err(error) => handle_domain_error(error, state.environment),
    }
}
