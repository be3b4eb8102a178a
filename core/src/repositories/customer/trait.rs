//! Customer repository trait defining the interface for customer persistence.
//!
//! The core only orchestrates "look up, else create". Uniqueness of CPF is
//! enforced by the storage behind this trait.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::customer::Customer;
use crate::domain::value_objects::Cpf;
use crate::errors::DomainError;

/// Repository trait for Customer persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use ff_core::repositories::CustomerRepository;
/// use ff_core::domain::{Cpf, Customer};
/// use ff_core::errors::DomainError;
///
/// struct PostgresCustomerRepository {
///     // connection pool
/// }
///
/// #[async_trait]
/// impl CustomerRepository for PostgresCustomerRepository {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Customer>, DomainError> { Ok(None) }
/// #   async fn exists_by_cpf(&self, cpf: &Cpf) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn add(&self, customer: Customer) -> Result<Customer, DomainError> { Ok(customer) }
/// }
/// ```
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by id
    ///
    /// # Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - No customer with this id
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;

    /// Find the customer registered under a normalized CPF
    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Customer>, DomainError>;

    /// Check whether any customer is registered under this CPF
    async fn exists_by_cpf(&self, cpf: &Cpf) -> Result<bool, DomainError>;

    /// Persist a new customer
    ///
    /// # Returns
    /// * `Ok(Customer)` - The stored customer
    /// * `Err(DomainError::Conflict)` - Another customer already holds this CPF or id
    /// * `Err(DomainError)` - Storage failure
    async fn add(&self, customer: Customer) -> Result<Customer, DomainError>;
}

#[async_trait]
impl<R: CustomerRepository + ?Sized> CustomerRepository for Arc<R> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        (**self).find_by_id(id).await
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Customer>, DomainError> {
        (**self).find_by_cpf(cpf).await
    }

    async fn exists_by_cpf(&self, cpf: &Cpf) -> Result<bool, DomainError> {
        (**self).exists_by_cpf(cpf).await
    }

    async fn add(&self, customer: Customer) -> Result<Customer, DomainError> {
        (**self).add(customer).await
    }
}
