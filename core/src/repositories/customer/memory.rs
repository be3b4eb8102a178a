//! In-memory implementation of CustomerRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::customer::Customer;
use crate::domain::value_objects::Cpf;
use crate::errors::DomainError;

use super::trait_::CustomerRepository;

/// Process-local customer store
///
/// Used by tests and by the `memory` storage backend. Contents are lost when
/// the process exits.
#[derive(Clone)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored customers
    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.values().find(|c| c.cpf() == Some(cpf)).cloned())
    }

    async fn exists_by_cpf(&self, cpf: &Cpf) -> Result<bool, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.values().any(|c| c.cpf() == Some(cpf)))
    }

    async fn add(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;

        if customers.contains_key(&customer.id()) {
            return Err(DomainError::Conflict {
                message: format!("customer {} already exists", customer.id()),
            });
        }

        if let Some(cpf) = customer.cpf() {
            if customers.values().any(|c| c.cpf() == Some(cpf)) {
                return Err(DomainError::Conflict {
                    message: "cpf already registered".to_string(),
                });
            }
        }

        customers.insert(customer.id(), customer.clone());
        Ok(customer)
    }
}
