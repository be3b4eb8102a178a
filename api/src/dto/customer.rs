use chrono::{DateTime, Utc};
use ff_core::CustomerToken;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of the register and identify endpoints
///
/// Accepts bare (`11144477735`), formatted (`111.444.777-35`) or padded CPFs.
/// Only oversized bodies are rejected here; `Cpf::parse` decides validity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CpfRequest {
    #[validate(length(max = 64, message = "cpf must have at most 64 characters"))]
    pub cpf: String,
}

/// Token issued for a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTokenResponse {
    pub token: String,
    pub customer_id: Uuid,
    pub expires_at: DateTime<Utc>,
    /// Seconds until `expires_at`
    pub expires_in: i64,
}

impl From<CustomerToken> for CustomerTokenResponse {
    fn from(token: CustomerToken) -> Self {
        let expires_in = token.expires_in();
        Self {
            token: token.token,
            customer_id: token.customer_id,
            expires_at: token.expires_at,
            expires_in,
        }
    }
}
