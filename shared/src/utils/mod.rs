//! Common utility functions

pub mod document;

pub use document::{digits_only, mask_cpf_digits};
