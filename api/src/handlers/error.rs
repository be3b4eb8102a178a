//! Domain error to HTTP response mapping

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};

use ff_core::errors::{DomainError, IdentityError, TokenError, ValidationError};
use ff_shared::{error_codes, Environment};

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Map a domain error to its status code and error body
///
/// Details of server-side failures are only exposed in development.
pub fn handle_domain_error(error: DomainError, environment: Environment) -> HttpResponse {
    let (status, body) = error_body(&error, environment);

    if status.is_server_error() {
        tracing::error!(error = %error, code = %body.error, "Request failed");
    } else {
        tracing::info!(code = %body.error, "Request rejected");
    }

    body.to_response(status)
}

fn error_body(error: &DomainError, environment: Environment) -> (StatusCode, ErrorResponse) {
    match error {
        DomainError::Validation(validation) => {
            let (code, message) = match validation {
                ValidationError::Required { field } => {
                    (error_codes::REQUIRED_FIELD, format!("{} is required", field))
                }
                ValidationError::InvalidFormat { field } => {
                    (error_codes::INVALID_FORMAT, format!("{} has an invalid format", field))
                }
                ValidationError::InvalidCheckDigit { field } => (
                    error_codes::INVALID_CHECK_DIGIT,
                    format!("{} has an invalid check digit", field),
                ),
            };
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(code, message).add_detail("field", validation.field()),
            )
        }
        DomainError::Identity(IdentityError::CustomerNotFound) => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::CUSTOMER_NOT_FOUND, "Customer not found"),
        ),
        DomainError::Conflict { .. } => (
            StatusCode::CONFLICT,
            ErrorResponse::new(error_codes::CONFLICT, "Customer already exists"),
        ),
        DomainError::Token(token_error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            server_error(
                error_codes::TOKEN_ERROR,
                "Token could not be issued",
                token_error_detail(token_error),
                environment,
            ),
        ),
        DomainError::Database { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            server_error(
                error_codes::DATABASE_ERROR,
                "A storage error occurred",
                message.clone(),
                environment,
            ),
        ),
        DomainError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            server_error(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
                message.clone(),
                environment,
            ),
        ),
    }
}

fn token_error_detail(error: &TokenError) -> String {
    error.to_string()
}

fn server_error(
    code: &str,
    public_message: &str,
    detail: String,
    environment: Environment,
) -> ErrorResponse {
    let response = ErrorResponse::new(code, public_message);
    if environment.is_development() {
        response.add_detail("cause", detail)
    } else {
        response
    }
}

/// Malformed or missing JSON bodies become `VALIDATION_ERROR` responses
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
        other => format!("Invalid request body: {}", other),
    };
    tracing::info!(error = %err, "Rejected request body");

    let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
        .to_response(StatusCode::BAD_REQUEST);
    actix_web::error::InternalError::from_response(err, response).into()
}
