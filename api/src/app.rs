//! Application state and factory
//!
//! Builds the actix-web `App` around a shared [`AppState`].

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ff_core::repositories::CustomerRepository;
use ff_core::services::token::TokenIssuer;
use ff_shared::error_codes;

use crate::dto::ErrorResponse;
use crate::handlers::json_error_handler;
use crate::routes::customer::{anonymous, identify, register};
use crate::routes::health::health_check;

pub use crate::routes::customer::AppState;

/// Largest accepted JSON body; CPF requests are a few dozen bytes
pub const JSON_PAYLOAD_LIMIT: usize = 4 * 1024;

/// Create and configure the application with all dependencies
pub fn create_app<R, T>(
    app_state: web::Data<AppState<R, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: CustomerRepository + ?Sized + 'static,
    T: TokenIssuer + ?Sized + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<R, T>))
        .service(
            web::scope("/api/customer")
                .route(
                    "/anonymous",
                    web::post().to(anonymous::create_anonymous::<R, T>),
                )
                .route("/register", web::post().to(register::register::<R, T>))
                .route("/identify", web::post().to(identify::identify::<R, T>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
