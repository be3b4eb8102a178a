//! Type definitions shared by the HTTP surface

pub mod response;

pub use response::{HealthResponse, HealthStatus, ServiceHealth};
