use std::sync::Arc;

use tracing::instrument;

use crate::domain::entities::customer::Customer;
use crate::domain::value_objects::{Cpf, CustomerToken};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CustomerRepository;
use crate::services::token::TokenIssuer;

/// Finds or creates the registered customer for a CPF and issues a token
///
/// Calling it twice with the same CPF returns the same customer id.
pub struct RegisterCustomer<R: ?Sized, T: ?Sized> {
    repository: Arc<R>,
    token_issuer: Arc<T>,
}

impl<R, T> RegisterCustomer<R, T>
where
    R: CustomerRepository + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub fn new(repository: Arc<R>, token_issuer: Arc<T>) -> Self {
        Self {
            repository,
            token_issuer,
        }
    }

    /// # Errors
    ///
    /// * `DomainError::Validation` - malformed CPF, nothing is read or written
    /// * `DomainError::Conflict` - insert lost a race and the winner is not readable
    /// * storage and token errors unchanged
    #[instrument(name = "register_customer", skip_all)]
    pub async fn execute(&self, raw_cpf: &str) -> DomainResult<CustomerToken> {
        let cpf = Cpf::parse(raw_cpf)?;

        let customer = match self.repository.find_by_cpf(&cpf).await? {
            Some(existing) => existing,
            None => self.create(cpf).await?,
        };

        let issued = self.token_issuer.issue(customer.id()).await?;
        Ok(CustomerToken::new(customer.id(), issued))
    }

    async fn create(&self, cpf: Cpf) -> DomainResult<Customer> {
        match self.repository.add(Customer::registered(cpf.clone())).await {
            Ok(saved) => Ok(saved),
            // A concurrent registration for the same CPF committed first
            Err(conflict @ DomainError::Conflict { .. }) => self
                .repository
                .find_by_cpf(&cpf)
                .await?
                .ok_or(conflict),
            Err(e) => Err(e),
        }
    }
}
