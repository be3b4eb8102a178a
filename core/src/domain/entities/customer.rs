//! Customer aggregate representing a person placing orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Cpf, Email};
use crate::errors::DomainError;

/// How a customer is identified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    /// No personal data, identified only by id
    Anonymous,
    /// Identified by CPF
    Registered,
}

impl CustomerType {
    /// Storage discriminator
    pub fn as_i16(self) -> i16 {
        match self {
            CustomerType::Anonymous => 0,
            CustomerType::Registered => 1,
        }
    }

    /// Decode a stored discriminator; unknown values are a data error
    pub fn from_i16(value: i16) -> Result<Self, DomainError> {
        match value {
            0 => Ok(CustomerType::Anonymous),
            1 => Ok(CustomerType::Registered),
            other => Err(DomainError::Database {
                message: format!("unknown customer_type discriminator {}", other),
            }),
        }
    }
}

/// Customer aggregate root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: Uuid,
    name: Option<String>,
    email: Option<Email>,
    cpf: Option<Cpf>,
    customer_type: CustomerType,
    created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a customer stamped with the current time
    pub fn new(
        id: Uuid,
        name: Option<String>,
        email: Option<Email>,
        cpf: Option<Cpf>,
        customer_type: CustomerType,
    ) -> Self {
        Self {
            id,
            name,
            email,
            cpf,
            customer_type,
            created_at: Utc::now(),
        }
    }

    /// A fresh anonymous customer with no personal data
    pub fn anonymous() -> Self {
        Self::new(Uuid::new_v4(), None, None, None, CustomerType::Anonymous)
    }

    /// A fresh registered customer identified only by CPF
    pub fn registered(cpf: Cpf) -> Self {
        Self::new(Uuid::new_v4(), None, None, Some(cpf), CustomerType::Registered)
    }

    /// Rebuild a customer from storage, keeping its original timestamp
    pub fn restore(
        id: Uuid,
        name: Option<String>,
        email: Option<Email>,
        cpf: Option<Cpf>,
        customer_type: CustomerType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            cpf,
            customer_type,
            created_at,
        }
    }

    /// Replace this identity with a new one
    ///
    /// The returned customer has a new id and creation time and has not been
    /// persisted; callers must `add` it. The consumed value is discarded.
    pub fn reidentify(
        self,
        name: Option<String>,
        email: Option<Email>,
        cpf: Option<Cpf>,
        customer_type: CustomerType,
    ) -> Customer {
        Customer::new(Uuid::new_v4(), name, email, cpf, customer_type)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn cpf(&self) -> Option<&Cpf> {
        self.cpf.as_ref()
    }

    pub fn customer_type(&self) -> CustomerType {
        self.customer_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_anonymous(&self) -> bool {
        self.customer_type == CustomerType::Anonymous
    }

    pub fn is_registered(&self) -> bool {
        self.customer_type == CustomerType::Registered
    }
}
