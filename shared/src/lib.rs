//! Shared utilities and common types for the FastFood auth server
//!
//! - Configuration types
//! - Error response structures
//! - Health and response wrappers
//! - Document number helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    ServerConfig, StorageBackend,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus, ServiceHealth};
pub use utils::document;
