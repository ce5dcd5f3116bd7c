//! Notification data models.
//!
//! A notification is written once per received webhook and never changed.
//! `transaction_id` is a plain string: nothing checks that the referenced
//! transaction exists, and several notifications may share one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery status a notification is recorded with.
pub const STATUS_SENT: &str = "sent";

/// Represents a notification record from the database.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "5a1f0c3e-7c1d-4a2b-9e0f-1d2c3b4a5f6e",
///   "transaction_id": "tx1",
///   "user_id": "u1",
///   "message": "Your transaction of $100.50 for \"coffee\" is completed",
///   "status": "sent",
///   "created_at": "2025-12-21T16:00:01Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub transaction_id: String,
    pub user_id: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
