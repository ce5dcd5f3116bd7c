//! Inbound webhook payload for the Notification Service.
//!
//! The Transaction Service posts its `Transaction` record as-is, so this
//! type mirrors that shape field for field.
//!
//! # Example
//!
//! ```json
//! {
//!   "id": "tx1",
//!   "user_id": "u1",
//!   "description": "coffee",
//!   "amount": 100.5,
//!   "status": "completed",
//!   "created_at": "2025-01-15T10:30:00Z"
//! }
//! ```
//!
//! `created_at` may also arrive without an offset
//! (`2025-01-15T10:30:00.123456`); such senders are taken to mean UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Path the Notification Service receives transaction events on.
pub const NEW_TRANSACTION_PATH: &str = "/webhooks/new-transaction";

/// A transaction event as received by the Notification Service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionWebhookPayload {
    /// Id of the originating transaction
    pub id: String,
    pub user_id: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: String,
    pub created_at: EventTime,
}

/// Timestamp of a received event, with or without a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    Zoned(DateTime<Utc>),
    Naive(NaiveDateTime),
}

impl EventTime {
    pub fn to_utc(self) -> DateTime<Utc> {
        match self {
            EventTime::Zoned(at) => at,
            EventTime::Naive(at) => at.and_utc(),
        }
    }
}

impl From<DateTime<Utc>> for EventTime {
    fn from(at: DateTime<Utc>) -> Self {
        EventTime::Zoned(at)
    }
}

/// Acknowledgement returned with `202 Accepted`.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookAccepted {
    /// Always `"accepted"`
    pub status: String,
    /// Id of the notification that was recorded
    pub notification_id: String,
}

impl WebhookAccepted {
    pub fn new(notification_id: String) -> Self {
        Self {
            status: "accepted".to_string(),
            notification_id,
        }
    }
}
