//! Domain entities representing core business objects.

pub mod customer;
pub mod token;


pub use customer::{Customer, CustomerType};
pub use token::Claims;
