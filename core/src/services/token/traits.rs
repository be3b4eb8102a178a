//! Port for signing customer tokens

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::value_objects::IssuedToken;
use crate::errors::DomainError;

/// Issues a signed bearer token for a customer id
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, customer_id: Uuid) -> Result<IssuedToken, DomainError>;
}

#[async_trait]
impl<T: TokenIssuer + ?Sized> TokenIssuer for Arc<T> {
    async fn issue(&self, customer_id: Uuid) -> Result<IssuedToken, DomainError> {
        (**self).issue(customer_id).await
    }
}
