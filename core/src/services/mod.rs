//! Business services containing domain logic and use cases.

pub mod customer;
pub mod token;

pub use customer::{CreateAnonymousCustomer, IdentifyCustomer, RegisterCustomer};
pub use token::{JwtTokenIssuer, TokenIssuer, TokenServiceConfig};
