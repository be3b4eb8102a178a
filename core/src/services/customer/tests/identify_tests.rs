use std::sync::Arc;

use crate::domain::entities::customer::Customer;
use crate::domain::value_objects::Cpf;
use crate::errors::{DomainError, IdentityError, ValidationError};
use crate::repositories::{CustomerRepository, InMemoryCustomerRepository};
use crate::services::customer::IdentifyCustomer;

use super::mocks::{RecordingTokenIssuer, UnavailableCustomerRepository};

#[tokio::test]
async fn test_identifies_registered_customer() {
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let customer = repository
        .add(Customer::registered(Cpf::parse("11144477735").unwrap()))
        .await
        .unwrap();
    let issuer = Arc::new(RecordingTokenIssuer::default());

    let token = IdentifyCustomer::new(repository, issuer.clone())
        .execute("111.444.777-35")
        .await
        .unwrap();

    assert_eq!(token.customer_id, customer.id());
    assert_eq!(issuer.calls(), 1);
}

#[tokio::test]
async fn test_unknown_cpf_is_not_found_and_issues_nothing() {
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let issuer = Arc::new(RecordingTokenIssuer::default());

    let result = IdentifyCustomer::new(repository.clone(), issuer.clone())
        .execute("12345678909")
        .await;

    assert_eq!(
        result,
        Err(DomainError::Identity(IdentityError::CustomerNotFound))
    );
    assert_eq!(issuer.calls(), 0);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_invalid_cpf_is_a_validation_error() {
    let issuer = Arc::new(RecordingTokenIssuer::default());
    let result = IdentifyCustomer::new(Arc::new(InMemoryCustomerRepository::new()), issuer)
        .execute("123")
        .await;

    assert_eq!(
        result,
        Err(DomainError::Validation(ValidationError::invalid_format("cpf")))
    );
}

#[tokio::test]
async fn test_storage_failure_propagates() {
    let issuer = Arc::new(RecordingTokenIssuer::default());
    let result = IdentifyCustomer::new(Arc::new(UnavailableCustomerRepository), issuer.clone())
        .execute("11144477735")
        .await;

    assert!(matches!(result, Err(DomainError::Database { .. })));
    assert_eq!(issuer.calls(), 0);
}
