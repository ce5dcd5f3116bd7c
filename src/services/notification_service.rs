//! Notification service - turn transaction webhooks into stored messages.
//!
//! There is no idempotency key: delivering the same webhook twice records
//! two notifications with two ids.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::{
    error::AppError,
    metrics::NotificationMetrics,
    models::notification::{Notification, STATUS_SENT},
    models::webhook::TransactionWebhookPayload,
    repositories::NotificationRepository,
};

/// Business logic for the Notification Service.
#[derive(Clone)]
pub struct NotificationService {
    repository: Arc<dyn NotificationRepository>,
    metrics: NotificationMetrics,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepository>, metrics: NotificationMetrics) -> Self {
        Self {
            repository,
            metrics,
        }
    }

    pub fn metrics(&self) -> &NotificationMetrics {
        &self.metrics
    }

    /// Record a notification for an incoming transaction event.
    ///
    /// The referenced transaction is not looked up; its id is stored as-is.
    ///
    /// # Errors
    ///
    /// - `Database`: the insert failed
    pub async fn receive_transaction_webhook(
        &self,
        payload: TransactionWebhookPayload,
    ) -> Result<Notification, AppError> {
        let transaction_created_at = payload.created_at.to_utc();
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            message: compose_message(payload.amount, &payload.description, &payload.status),
            transaction_id: payload.id,
            user_id: payload.user_id,
            status: STATUS_SENT.to_string(),
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(notification).await?;
        self.metrics.notifications_total.inc();

        tracing::info!(
            notification_id = %stored.id,
            transaction_id = %stored.transaction_id,
            user_id = %stored.user_id,
            %transaction_created_at,
            "notification recorded"
        );

        Ok(stored)
    }

    /// All notifications for a user, newest first. Empty if there are none.
    ///
    /// # Errors
    ///
    /// - `Database`: the query failed
    pub async fn list_notifications(&self, user_id: &str) -> Result<Vec<Notification>, AppError> {
        Ok(self.repository.list_by_user(user_id).await?)
    }
}

/// Human-readable text for a transaction event.
pub fn compose_message(amount: Decimal, description: &str, status: &str) -> String {
    format!(
        "Your transaction of {} for \"{}\" is {}",
        format_amount(amount),
        description,
        status
    )
}

/// Format an amount as en-US currency: `$1,234.50`, `-$3.00`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}${}.{fraction}", group_thousands(whole))
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
