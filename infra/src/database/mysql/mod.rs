//! MySQL repository implementations

pub(crate) mod customer_repository_impl;

pub use customer_repository_impl::{MySqlCustomerRepository, CUSTOMERS_TABLE_DDL};
