//! Outbound webhook from the Transaction Service to the Notification Service.
//!
//! Delivery is at-most-once and best-effort: a single POST per created
//! transaction, no retry, no queue. Failures are logged, counted and then
//! dropped; the caller that created the transaction never sees them.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use prometheus::IntCounter;
use tokio::task::JoinHandle;
use url::Url;

use crate::models::transaction::Transaction;

/// Errors from a single delivery attempt.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Connection, timeout, or non-success status from the receiver.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Something that can tell the Notification Service about a transaction.
#[async_trait]
pub trait TransactionNotifier: Send + Sync {
    async fn notify(&self, transaction: &Transaction) -> Result<(), NotifyError>;
}

/// Posts the transaction JSON to the Notification Service webhook.
///
/// # Headers Sent
///
/// - `Content-Type: application/json`
///
/// # Timeout
///
/// Configurable per client (`NOTIFICATION_TIMEOUT_SECS`), applied to the
/// whole request.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpNotifier {
    /// Build a notifier with one shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl TransactionNotifier for HttpNotifier {
    async fn notify(&self, transaction: &Transaction) -> Result<(), NotifyError> {
        self.client
            .post(self.endpoint.clone())
            .json(transaction)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Send the webhook on a background task and swallow any failure.
///
/// The returned handle may be dropped; the task runs to completion on its
/// own.
pub fn dispatch(
    notifier: Arc<dyn TransactionNotifier>,
    transaction: Transaction,
    failures: IntCounter,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match notifier.notify(&transaction).await {
            Ok(()) => {
                tracing::debug!(transaction_id = %transaction.id, "notification webhook delivered");
            }
            Err(e) => {
                failures.inc();
                tracing::warn!(
                    transaction_id = %transaction.id,
                    error = %e,
                    "notification webhook failed, dropping"
                );
            }
        }
    })
}
