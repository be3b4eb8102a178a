//! Token issuance for customer identities
//!
//! - `TokenIssuer` port used by the customer use cases
//! - `JwtTokenIssuer` adapter signing HMAC JWTs with `jsonwebtoken`

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::{TokenServiceConfig, MAX_EXPIRATION_HOURS, MIN_SECRET_LENGTH};
pub use service::JwtTokenIssuer;
pub use traits::TokenIssuer;
