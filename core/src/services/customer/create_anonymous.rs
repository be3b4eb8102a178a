use std::sync::Arc;

use tracing::instrument;

use crate::domain::entities::customer::Customer;
use crate::domain::value_objects::CustomerToken;
use crate::errors::DomainResult;
use crate::repositories::CustomerRepository;
use crate::services::token::TokenIssuer;

/// Mints a new anonymous customer and a token for it
pub struct CreateAnonymousCustomer<R: ?Sized, T: ?Sized> {
    repository: Arc<R>,
    token_issuer: Arc<T>,
}

impl<R, T> CreateAnonymousCustomer<R, T>
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

    #[instrument(name = "create_anonymous_customer", skip_all)]
    pub async fn execute(&self) -> DomainResult<CustomerToken> {
        let customer = self.repository.add(Customer::anonymous()).await?;
        let issued = self.token_issuer.issue(customer.id()).await?;
        Ok(CustomerToken::new(customer.id(), issued))
    }
}
