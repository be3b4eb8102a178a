//! Customer identity use cases
//!
//! Each use case resolves a customer through the `CustomerRepository` port
//! and then asks the `TokenIssuer` port for a bearer token.

mod create_anonymous;
mod identify;
mod register;

#[cfg(test)]
mod tests;

pub use create_anonymous::CreateAnonymousCustomer;
pub use identify::IdentifyCustomer;
pub use register::RegisterCustomer;
