//! HTTP request handlers (route handlers).
//!
//! Handlers extract the request, call into a service and shape the
//! response. Business rules live in [`crate::services`].

/// Liveness endpoints for both services
pub mod health;
/// Prometheus exposition endpoints
pub mod metrics;
/// Notification listing (Notification Service)
pub mod notifications;
/// Transaction create and read (Transaction Service)
pub mod transactions;
/// Inbound transaction webhook (Notification Service)
pub mod webhooks;
