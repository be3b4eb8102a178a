//! Token outputs returned by the identity use cases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed token as produced by a `TokenIssuer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWS
    pub token: String,

    pub expires_at: DateTime<Utc>,
}

/// Bearer token bound to a customer identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerToken {
    pub token: String,
    pub customer_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl CustomerToken {
    pub fn new(customer_id: Uuid, issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            customer_id,
            expires_at: issued.expires_at,
        }
    }

    /// Seconds until expiry, never negative
    pub fn expires_in(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}
