//! Customer identity endpoints
//!
//! - Anonymous customer creation
//! - Registration by CPF
//! - Identification by CPF

pub mod anonymous;
pub mod identify;
pub mod register;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::Validate;

use ff_core::repositories::CustomerRepository;
use ff_core::services::customer::{CreateAnonymousCustomer, IdentifyCustomer, RegisterCustomer};
use ff_core::services::token::TokenIssuer;
use ff_infra::DatabasePool;
use ff_shared::document::{digits_only, mask_cpf_digits};
use ff_shared::Environment;

use crate::dto::{validation_error_response, CpfRequest, ErrorResponseExt};

/// Application state shared by all customer handlers
pub struct AppState<R: ?Sized, T: ?Sized> {
    pub create_anonymous: CreateAnonymousCustomer<R, T>,
    pub register: RegisterCustomer<R, T>,
    pub identify: IdentifyCustomer<R, T>,
    /// Pool probed by `/health`, absent for the in-memory backend
    pub database: Option<DatabasePool>,
    pub environment: Environment,
}

impl<R, T> AppState<R, T>
where
    R: CustomerRepository + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub fn new(repository: Arc<R>, token_issuer: Arc<T>) -> Self {
        Self {
            create_anonymous: CreateAnonymousCustomer::new(
                Arc::clone(&repository),
                Arc::clone(&token_issuer),
            ),
            register: RegisterCustomer::new(Arc::clone(&repository), Arc::clone(&token_issuer)),
            identify: IdentifyCustomer::new(repository, token_issuer),
            database: None,
            environment: Environment::default(),
        }
    }

    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

/// Masked CPF for log fields, never the raw input
pub(crate) fn masked_cpf(raw: &str) -> String {
    mask_cpf_digits(&digits_only(raw))
}

/// Run the DTO rules, producing the 400 response on failure
pub(crate) fn validate_request(request: &CpfRequest) -> Result<(), HttpResponse> {
    request.validate().map_err(|errors| {
        tracing::info!(
            cpf = %masked_cpf(&request.cpf),
            "Rejected CPF request: {}",
            errors
        );
        validation_error_response(&errors).to_response(StatusCode::BAD_REQUEST)
    })
}
