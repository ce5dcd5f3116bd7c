//! Persistence for the `notifications` table.

use async_trait::async_trait;

use crate::db::DbPool;
use crate::models::notification::Notification;

/// Append-and-list access to stored notifications.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist a new row and return it as stored.
    async fn insert(&self, notification: Notification) -> Result<Notification, sqlx::Error>;

    /// All rows for `user_id`, newest `created_at` first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>, sqlx::Error>;
}

/// PostgreSQL-backed notification store.
#[derive(Debug, Clone)]
pub struct PgNotificationRepository {
    pool: DbPool,
}

impl PgNotificationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn insert(&self, notification: Notification) -> Result<Notification, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (id, transaction_id, user_id, message, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, transaction_id, user_id, message, status, created_at
            "#,
        )
        .bind(notification.id)
        .bind(notification.transaction_id)
        .bind(notification.user_id)
        .bind(notification.message)
        .bind(notification.status)
        .bind(notification.created_at)
        .fetch_one(&self.pool)
        .await
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, transaction_id, user_id, message, status, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
