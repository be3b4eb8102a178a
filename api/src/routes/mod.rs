//! Route handlers

pub mod customer;
pub mod health;
