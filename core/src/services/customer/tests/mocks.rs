//! Test doubles for the customer use cases

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::customer::Customer;
use crate::domain::value_objects::{Cpf, IssuedToken};
use crate::errors::{DomainError, TokenError};
use crate::repositories::CustomerRepository;
use crate::services::token::TokenIssuer;

/// Issues `token-<id>` and records every customer id it was asked for
#[derive(Default)]
pub struct RecordingTokenIssuer {
    pub issued_for: Mutex<Vec<Uuid>>,
}

impl RecordingTokenIssuer {
    pub fn calls(&self) -> usize {
        self.issued_for.lock().unwrap().len()
    }
}

#[async_trait]
impl TokenIssuer for RecordingTokenIssuer {
    async fn issue(&self, customer_id: Uuid) -> Result<IssuedToken, DomainError> {
        self.issued_for.lock().unwrap().push(customer_id);
        Ok(IssuedToken {
            token: format!("token-{}", customer_id),
            expires_at: Utc::now() + Duration::hours(24),
        })
    }
}

pub struct FailingTokenIssuer;

#[async_trait]
impl TokenIssuer for FailingTokenIssuer {
    async fn issue(&self, _customer_id: Uuid) -> Result<IssuedToken, DomainError> {
        Err(TokenError::TokenGenerationFailed.into())
    }
}

/// Simulates losing an insert race: the first lookup misses, `add` reports a
/// conflict, and later lookups see the winner (if any)
pub struct RacingCustomerRepository {
    winner: Option<Customer>,
    lookups: AtomicUsize,
    pub add_attempts: AtomicUsize,
}

impl RacingCustomerRepository {
    pub fn with_winner(winner: Customer) -> Self {
        Self {
            winner: Some(winner),
            lookups: AtomicUsize::new(0),
            add_attempts: AtomicUsize::new(0),
        }
    }

    pub fn without_winner() -> Self {
        Self {
            winner: None,
            lookups: AtomicUsize::new(0),
            add_attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CustomerRepository for RacingCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        Ok(self.winner.clone().filter(|c| c.id() == id))
    }

    async fn find_by_cpf(&self, _cpf: &Cpf) -> Result<Option<Customer>, DomainError> {
        if self.lookups.fetch_add(1, Ordering::SeqCst) == 0 {
            return Ok(None);
        }
        Ok(self.winner.clone())
    }

    async fn exists_by_cpf(&self, cpf: &Cpf) -> Result<bool, DomainError> {
        Ok(self.find_by_cpf(cpf).await?.is_some())
    }

    async fn add(&self, _customer: Customer) -> Result<Customer, DomainError> {
        self.add_attempts.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Conflict {
            message: "cpf already registered".to_string(),
        })
    }
}

/// Every operation fails with a database error
pub struct UnavailableCustomerRepository;

#[async_trait]
impl CustomerRepository for UnavailableCustomerRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Customer>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_cpf(&self, _cpf: &Cpf) -> Result<Option<Customer>, DomainError> {
        Err(unavailable())
    }

    async fn exists_by_cpf(&self, _cpf: &Cpf) -> Result<bool, DomainError> {
        Err(unavailable())
    }

    async fn add(&self, _customer: Customer) -> Result<Customer, DomainError> {
        Err(unavailable())
    }
}

fn unavailable() -> DomainError {
    DomainError::Database {
        message: "connection refused".to_string(),
    }
}
