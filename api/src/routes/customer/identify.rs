use actix_web::{web, HttpResponse};

use ff_core::repositories::CustomerRepository;
use ff_core::services::token::TokenIssuer;

use super::{masked_cpf, validate_request, AppState};
use crate::dto::{CpfRequest, CustomerTokenResponse};
use crate::handlers::handle_domain_error;

/// Handler for POST /api/customer/identify
///
/// Issues a token for an already registered CPF. Unknown CPFs get
/// 401 `CUSTOMER_NOT_FOUND`.
pub async fn identify<R, T>(
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

    match state.identify.execute(&request.cpf).await {
        Ok(token) => {
            tracing::info!(customer_id = %token.customer_id, cpf = %cpf, "Customer identified");
            HttpResponse::Ok().json(CustomerTokenResponse::from(token))
        }
        Err(error) => {
            tracing::debug!(cpf = %cpf, "Identification failed");
            handle_domain_error(error, state.environment)
        }
    }
}
