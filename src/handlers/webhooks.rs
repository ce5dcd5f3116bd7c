//! Inbound webhook handler for the Notification Service.
//!
//! `POST /webhooks/new-transaction` has no authentication and no
//! idempotency key; every accepted call records a new notification.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::webhook::{TransactionWebhookPayload, WebhookAccepted},
    services::notification_service::NotificationService,
};

/// Receive a transaction event.
///
/// # Request Body
///
/// ```json
/// {
///   "id": "tx1",
///   "user_id": "u1",
///   "description": "coffee",
///   "amount": 100.5,
///   "status": "completed",
///   "created_at": "2025-01-15T10:30:00Z"
/// }
/// ```
///
/// # Response (202)
///
/// ```json
/// {
///   "status": "accepted",
///   "notification_id": "5a1f0c3e-..."
/// }
/// ```
pub async fn new_transaction(
    State(service): State<NotificationService>,
    payload: Result<Json<TransactionWebhookPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let notification = service.receive_transaction_webhook(payload).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(WebhookAccepted::new(notification.id)),
    ))
}
