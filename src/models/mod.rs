//! Data models representing database entities and wire payloads.

/// Notification record owned by the Notification Service
pub mod notification;
/// Transaction record owned by the Transaction Service
pub mod transaction;
/// Payload carried by the inter-service webhook
pub mod webhook;
