//! # FastFood Core
//!
//! Customer identity domain for the FastFood auth backend: the `Cpf` and
//! `Email` value objects, the `Customer` aggregate, the repository and token
//! issuer ports, and the anonymous / register / identify use cases.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Claims, Cpf, Customer, CustomerToken, CustomerType, Email, IssuedToken};
pub use errors::{DomainError, DomainResult, IdentityError, TokenError, ValidationError};
pub use repositories::{CustomerRepository, InMemoryCustomerRepository};
pub use services::{
    CreateAnonymousCustomer, IdentifyCustomer, JwtTokenIssuer, RegisterCustomer, TokenIssuer,
    TokenServiceConfig,
};
