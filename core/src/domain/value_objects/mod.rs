//! Value objects representing immutable domain concepts.

pub mod cpf;
pub mod customer_token;
pub mod email;

pub use cpf::{Cpf, CPF_LENGTH};
pub use customer_token::{CustomerToken, IssuedToken};
pub use email::Email;
