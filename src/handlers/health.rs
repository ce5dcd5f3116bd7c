//! Health check endpoints for service monitoring.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::services::{notification_service::NotificationService, transaction_service::TransactionService};

/// Name reported by the Transaction Service.
pub const TRANSACTION_SERVICE_NAME: &str = "transaction-api";

/// Name reported by the Notification Service.
pub const NOTIFICATION_SERVICE_NAME: &str = "notification-api";

/// Health check response.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "transaction-api"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Which service answered
    pub service: String,
}

impl HealthResponse {
    fn healthy(service: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.to_string(),
        }
    }
}

/// Liveness only: the database is not probed.
pub async fn transaction_health(State(service): State<TransactionService>) -> Json<HealthResponse> {
    service.metrics().health_checks_total.inc();
    Json(HealthResponse::healthy(TRANSACTION_SERVICE_NAME))
}

pub async fn notification_health(
    State(service): State<NotificationService>,
) -> Json<HealthResponse> {
    service.metrics().health_checks_total.inc();
    Json(HealthResponse::healthy(NOTIFICATION_SERVICE_NAME))
}
