//! Transaction data models and API request types.
//!
//! This module defines:
//! - `Transaction`: Database entity, API response body, cache value and
//!   webhook body all at once
//! - `CreateTransactionRequest`: Request body for `POST /transactions`
//! - `NewTransaction`: A fully-populated row ready to be inserted

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status every transaction is created with. Nothing transitions it.
pub const STATUS_COMPLETED: &str = "completed";

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Rows are insert-only: no code path
/// updates or deletes a transaction once it is written.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "0b6f1c9e-5d0c-4c39-8a5e-0e6f2f1b7b1a",
///   "amount": 100.5,
///   "user_id": "u1",
///   "description": "coffee",
///   "created_at": "2025-12-21T16:00:00Z",
///   "status": "completed"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Signed amount. No business range is enforced, but values past the
    /// `Decimal` limit (about ±7.9e28) fail to deserialize with a 422
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Opaque user reference, not checked against any registry
    pub user_id: String,

    /// Free text
    pub description: String,

    /// When the row was persisted
    pub created_at: DateTime<Utc>,

    /// Always [`STATUS_COMPLETED`]
    pub status: String,
}

/// Request to create a transaction.
///
/// ```json
/// {
///   "amount": 100.50,
///   "user_id": "u1",
///   "description": "coffee"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub user_id: String,
    pub description: String,
}

/// A transaction with its server-assigned fields filled in, not yet stored.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub id: String,
    pub amount: Decimal,
    pub user_id: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

impl NewTransaction {
    /// Assign a fresh id, the current time and the creation status.
    pub fn from_request(request: CreateTransactionRequest) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            amount: request.amount,
            user_id: request.user_id,
            description: request.description,
            created_at: Utc::now(),
            status: STATUS_COMPLETED.to_string(),
        }
    }
}
