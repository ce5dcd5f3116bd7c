//! `GET /metrics` for both services.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::{
    error::AppError,
    metrics,
    services::{notification_service::NotificationService, transaction_service::TransactionService},
};

pub async fn transaction_metrics(
    State(service): State<TransactionService>,
) -> Result<impl IntoResponse, AppError> {
    let body = service.metrics().render()?;
    Ok(([(header::CONTENT_TYPE, metrics::content_type())], body))
}

pub async fn notification_metrics(
    State(service): State<NotificationService>,
) -> Result<impl IntoResponse, AppError> {
    let body = service.metrics().render()?;
    Ok(([(header::CONTENT_TYPE, metrics::content_type())], body))
}
