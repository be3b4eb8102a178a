//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

pub use entities::{Claims, Customer, CustomerType};
pub use value_objects::{Cpf, CustomerToken, Email, IssuedToken, CPF_LENGTH};
