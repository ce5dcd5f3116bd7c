//! Notification listing handler.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppError, models::notification::Notification,
    services::notification_service::NotificationService,
};

/// List a user's notifications, newest first.
///
/// # Response (200 OK)
///
/// A JSON array, empty when the user has none.
pub async fn list_notifications(
    State(service): State<NotificationService>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = service.list_notifications(&user_id).await?;
    Ok(Json(notifications))
}
