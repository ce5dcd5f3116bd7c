//! Router construction for both services.
//!
//! Binaries build the service layer and hand it here; tests do the same
//! with in-memory stores.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers,
    models::webhook::NEW_TRANSACTION_PATH,
    services::{notification_service::NotificationService, transaction_service::TransactionService},
};

/// Routes served by the Transaction Service.
pub fn transaction_router(service: TransactionService) -> Router {
    Router::new()
        .route("/health", get(handlers::health::transaction_health))
        .route("/metrics", get(handlers::metrics::transaction_metrics))
        .route(
            "/transactions",
            post(handlers::transactions::create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Routes served by the Notification Service.
pub fn notification_router(service: NotificationService) -> Router {
    Router::new()
        .route("/health", get(handlers::health::notification_health))
        .route("/metrics", get(handlers::metrics::notification_metrics))
        .route(NEW_TRANSACTION_PATH, post(handlers::webhooks::new_transaction))
        .route(
            "/notifications/{user_id}",
            get(handlers::notifications::list_notifications),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
