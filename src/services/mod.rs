//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They own the cache policy, the webhook hand-off and message synthesis.

pub mod notification_service;
pub mod transaction_service;
pub mod webhook_service;
