//! In-memory stand-ins for the database and the webhook receiver.

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::{Mutex, mpsc};

use crate::models::notification::Notification;
use crate::models::transaction::{NewTransaction, STATUS_COMPLETED, Transaction};
use crate::models::webhook::TransactionWebhookPayload;
use crate::repositories::{NotificationRepository, TransactionRepository};
use crate::services::webhook_service::{NotifyError, TransactionNotifier};

/// Transaction store that counts `find_by_id` calls.
#[derive(Default)]
pub struct MemoryTransactionRepository {
    rows: Mutex<Vec<Transaction>>,
    lookups: AtomicUsize,
}

impl MemoryTransactionRepository {
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    /// Number of times the store was queried by id.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionRepository for MemoryTransactionRepository {
    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, sqlx::Error> {
        let row = Transaction {
            id: transaction.id,
            amount: transaction.amount,
            user_id: transaction.user_id,
            description: transaction.description,
            created_at: transaction.created_at,
            status: transaction.status,
        };
        self.rows.lock().await.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Transaction>, sqlx::Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }
}

/// Notification store with the same ordering as the SQL query.
#[derive(Default)]
pub struct MemoryNotificationRepository {
    rows: Mutex<Vec<Notification>>,
}

#[async_trait]
impl NotificationRepository for MemoryNotificationRepository {
    async fn insert(&self, notification: Notification) -> Result<Notification, sqlx::Error> {
        self.rows.lock().await.push(notification.clone());
        Ok(notification)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>, sqlx::Error> {
        let rows = self.rows.lock().await;
        let mut matching: Vec<Notification> = rows
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}

/// Store whose every call fails as if the database were down.
pub struct UnavailableTransactionRepository;

#[async_trait]
impl TransactionRepository for UnavailableTransactionRepository {
    async fn insert(&self, _transaction: NewTransaction) -> Result<Transaction, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Transaction>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Notifier that forwards every transaction to a channel.
pub struct RecordingNotifier {
    sender: mpsc::UnboundedSender<Transaction>,
}

impl RecordingNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Transaction>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl TransactionNotifier for RecordingNotifier {
    async fn notify(&self, transaction: &Transaction) -> Result<(), NotifyError> {
        // A dropped receiver just means the test stopped listening.
        let _ = self.sender.send(transaction.clone());
        Ok(())
    }
}

/// Notifier that always fails with a request error.
pub struct FailingNotifier;

#[async_trait]
impl TransactionNotifier for FailingNotifier {
    async fn notify(&self, _transaction: &Transaction) -> Result<(), NotifyError> {
        // An unparseable URL fails inside reqwest without touching the network.
        let Err(error) = reqwest::Client::new().post("not a url").send().await else {
            panic!("request to an invalid URL unexpectedly succeeded");
        };
        Err(NotifyError::Request(error))
    }
}

pub fn sample_transaction(id: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: Decimal::from_str("100.5").unwrap(),
        user_id: "u1".to_string(),
        description: "coffee".to_string(),
        created_at: Utc::now(),
        status: STATUS_COMPLETED.to_string(),
    }
}

pub fn sample_webhook(transaction_id: &str, user_id: &str) -> TransactionWebhookPayload {
    TransactionWebhookPayload {
        id: transaction_id.to_string(),
        user_id: user_id.to_string(),
        description: "coffee".to_string(),
        amount: Decimal::from_str("100.5").unwrap(),
        status: STATUS_COMPLETED.to_string(),
        created_at: Utc::now().into(),
    }
}
