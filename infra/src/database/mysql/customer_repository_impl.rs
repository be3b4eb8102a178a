//! MySQL implementation of the CustomerRepository trait.
//!
//! Rows are re-validated on the way out: a stored CPF, email or type
//! discriminator that no longer parses is reported as a database error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ff_core::domain::{Cpf, Customer, CustomerType, Email};
use ff_core::errors::DomainError;
use ff_core::repositories::CustomerRepository;

/// Table definition the repository expects
pub const CUSTOMERS_TABLE_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id CHAR(36) NOT NULL PRIMARY KEY,
        name VARCHAR(500) NULL,
        email VARCHAR(255) NULL,
        cpf CHAR(11) NULL,
        customer_type TINYINT NOT NULL,
        created_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_customers_cpf (cpf)
    )
"#;

const SELECT_COLUMNS: &str = "SELECT id, name, email, cpf, customer_type, created_at FROM customers";

/// MySQL implementation of CustomerRepository
///
/// CPF uniqueness is enforced by the `uq_customers_cpf` index; a duplicate
/// insert surfaces as `DomainError::Conflict`.
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Customer entity
    fn row_to_customer(row: &sqlx::mysql::MySqlRow) -> Result<Customer, DomainError> {
        let id: String = row.try_get("id").map_err(column_error("id"))?;
        let name: Option<String> = row.try_get("name").map_err(column_error("name"))?;
        let email: Option<String> = row.try_get("email").map_err(column_error("email"))?;
        let cpf: Option<String> = row.try_get("cpf").map_err(column_error("cpf"))?;
        let customer_type: i8 = row
            .try_get("customer_type")
            .map_err(column_error("customer_type"))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(column_error("created_at"))?;

        let id = Uuid::parse_str(&id).map_err(|e| DomainError::Database {
            message: format!("Invalid customer id {}: {}", id, e),
        })?;

        let email = email
            .as_deref()
            .map(Email::parse)
            .transpose()
            .map_err(|_| stored_value_error(id, "email"))?;

        let cpf = cpf
            .as_deref()
            .map(Cpf::parse)
            .transpose()
            .map_err(|_| stored_value_error(id, "cpf"))?;

        let customer_type = CustomerType::from_i16(i16::from(customer_type))?;

        Ok(Customer::restore(id, name, email, cpf, customer_type, created_at))
    }

    async fn fetch_one_where(
        &self,
        clause: &str,
        value: String,
    ) -> Result<Option<Customer>, DomainError> {
        let query = format!("{} WHERE {} = ? LIMIT 1", SELECT_COLUMNS, clause);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "query customer"))?;

        row.as_ref().map(Self::row_to_customer).transpose()
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        self.fetch_one_where("id", id.to_string()).await
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Customer>, DomainError> {
        self.fetch_one_where("cpf", cpf.as_str().to_string()).await
    }

    async fn exists_by_cpf(&self, cpf: &Cpf) -> Result<bool, DomainError> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE cpf = ?)")
                .bind(cpf.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_sqlx_error(e, "check customer cpf"))?;

        Ok(exists != 0)
    }

    async fn add(&self, customer: Customer) -> Result<Customer, DomainError> {
        let query = r#"
            INSERT INTO customers (id, name, email, cpf, customer_type, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(customer.id().to_string())
            .bind(customer.name())
            .bind(customer.email().map(Email::as_str))
            .bind(customer.cpf().map(Cpf::as_str))
            .bind(customer.customer_type().as_i16() as i8)
            .bind(customer.created_at())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let err = map_sqlx_error(e, "insert customer");
                if err.is_conflict() {
                    tracing::info!(
                        customer_id = %customer.id(),
                        cpf = %customer.cpf().map(Cpf::masked).unwrap_or_default(),
                        "Customer insert hit unique constraint"
                    );
                }
                err
            })?;

        tracing::debug!(
            customer_id = %customer.id(),
            customer_type = ?customer.customer_type(),
            "Customer stored"
        );

        Ok(customer)
    }
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    }
}

fn stored_value_error(id: Uuid, column: &str) -> DomainError {
    tracing::error!(customer_id = %id, column, "Stored customer value failed validation");
    DomainError::Database {
        message: format!("Stored {} for customer {} is invalid", column, id),
    }
}

/// Unique-key violations become `Conflict`; everything else is `Database`
pub(crate) fn map_sqlx_error(e: sqlx::Error, context: &str) -> DomainError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            DomainError::Conflict {
                message: format!("{}: {}", context, db_err.message()),
            }
        }
        other => {
            tracing::error!(error = %other, "Failed to {}", context);
            DomainError::Database {
                message: format!("Failed to {}: {}", context, other),
            }
        }
    }
}
