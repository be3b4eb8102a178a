//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - `CustomerRepository` implementation

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlCustomerRepository, CUSTOMERS_TABLE_DDL};
