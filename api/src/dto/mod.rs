pub mod customer;
pub mod error;

pub use customer::{CpfRequest, CustomerTokenResponse};
pub use error::{validation_error_response, ErrorResponse, ErrorResponseExt};
