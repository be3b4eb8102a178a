use std::sync::Arc;

use tracing::instrument;

use crate::domain::value_objects::{Cpf, CustomerToken};
use crate::errors::{DomainResult, IdentityError};
use crate::repositories::CustomerRepository;
use crate::services::token::TokenIssuer;

/// Issues a token for an already registered CPF; never creates customers
pub struct IdentifyCustomer<R: ?Sized, T: ?Sized> {
    repository: Arc<R>,
    token_issuer: Arc<T>,
}

impl<R, T> IdentifyCustomer<R, T>
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

    #[instrument(name = "identify_customer", skip_all)]
    pub async fn execute(&self, raw_cpf: &str) -> DomainResult<CustomerToken> {
        let cpf = Cpf::parse(raw_cpf)?;

        let customer = self
            .repository
            .find_by_cpf(&cpf)
            .await?
            .ok_or(IdentityError::CustomerNotFound)?;

        let issued = self.token_issuer.issue(customer.id()).await?;
        Ok(CustomerToken::new(customer.id(), issued))
    }
}
