//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::{LedgerRecord, UserProfile};

/// Fixed body of `GET /api/ping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

impl PingResponse {
    #[must_use]
    pub fn pong() -> Self {
        Self {
            message: "pong".to_string(),
        }
    }
}

/// Body of `GET /api/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
        }
    }
}

/// Body of `POST /api/points`.
///
/// ```json
/// { "customer_id": 1, "amount": 12000, "event": "purchase" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddPointRequest {
    pub customer_id: i64,
    /// Purchase amount; negative values fail deserialization.
    pub amount: u64,
    /// Ledger label, defaulting to `purchase`.
    #[serde(default)]
    pub event: Option<String>,
}

/// A ledger record as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointEventResponse {
    pub id: i64,
    pub customer_id: i64,
    pub event: String,
    pub point: i64,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl From<LedgerRecord> for PointEventResponse {
    fn from(record: LedgerRecord) -> Self {
        Self {
            id: record.id,
            customer_id: record.customer_id.value(),
            event: record.event.as_str().to_string(),
            point: record.point,
            created_at: record.created_at.to_string(),
        }
    }
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
