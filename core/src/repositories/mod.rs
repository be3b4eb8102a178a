pub mod customer;

pub use customer::{CustomerRepository, InMemoryCustomerRepository};
