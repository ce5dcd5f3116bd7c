//! Transaction service - create and cache-first read.
//!
//! # Create flow
//!
//! 1. Assign id, timestamp and status, insert the row
//! 2. Count it in `transactions_total`
//! 3. Delete the cache entry for the new id
//! 4. Hand the record to the webhook dispatcher in the background
//!
//! # Read flow
//!
//! Cache hit returns without touching the database. On a miss the row is
//! loaded, written back to the cache for [`CACHE_TTL`], then returned.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    cache::Cache,
    error::AppError,
    metrics::TransactionMetrics,
    models::transaction::{CreateTransactionRequest, NewTransaction, Transaction},
    repositories::TransactionRepository,
    services::webhook_service::{self, TransactionNotifier},
};

/// How long a transaction stays in the cache after a read miss.
pub const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Cache key for a transaction id.
pub fn cache_key(id: &str) -> String {
    format!("transaction:{id}")
}

/// Business logic for the Transaction Service.
#[derive(Clone)]
pub struct TransactionService {
    repository: Arc<dyn TransactionRepository>,
    cache: Arc<dyn Cache>,
    notifier: Arc<dyn TransactionNotifier>,
    metrics: TransactionMetrics,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepository>,
        cache: Arc<dyn Cache>,
        notifier: Arc<dyn TransactionNotifier>,
        metrics: TransactionMetrics,
    ) -> Self {
        Self {
            repository,
            cache,
            notifier,
            metrics,
        }
    }

    pub fn metrics(&self) -> &TransactionMetrics {
        &self.metrics
    }

    /// Persist a new transaction and notify the Notification Service.
    ///
    /// # Errors
    ///
    /// - `Database`: the insert failed
    /// - `Cache`: the cache entry could not be deleted
    ///
    /// Webhook delivery failures are never returned.
    pub async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, AppError> {
        let transaction = self
            .repository
            .insert(NewTransaction::from_request(request))
            .await?;

        self.metrics.transactions_total.inc();

        // The id is fresh, so there is never anything to remove.
        self.cache.delete(&cache_key(&transaction.id)).await?;

        webhook_service::dispatch(
            Arc::clone(&self.notifier),
            transaction.clone(),
            self.metrics.webhook_failures_total.clone(),
        );

        tracing::info!(
            transaction_id = %transaction.id,
            user_id = %transaction.user_id,
            "transaction created"
        );

        Ok(transaction)
    }

    /// Fetch a transaction, cache first.
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound`: no row with this id
    /// - `Database`, `Cache`: backing store failures
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, AppError> {
        let key = cache_key(id);

        if let Some(cached) = self.cache.get_json::<Transaction>(&key).await? {
            tracing::debug!(transaction_id = id, "cache hit");
            return Ok(cached);
        }

        let transaction = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::TransactionNotFound)?;

        self.cache.set_json(&key, &transaction, CACHE_TTL).await?;

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryCache, NoCache};
    use crate::testing::{FailingNotifier, MemoryTransactionRepository, RecordingNotifier};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn coffee() -> CreateTransactionRequest {
        CreateTransactionRequest {
            amount: Decimal::from_str("100.50").unwrap(),
            user_id: "u1".to_string(),
            description: "coffee".to_string(),
        }
    }

    fn service_with(
        repository: Arc<MemoryTransactionRepository>,
        cache: Arc<dyn Cache>,
        notifier: Arc<dyn TransactionNotifier>,
    ) -> TransactionService {
        TransactionService::new(
            repository,
            cache,
            notifier,
            TransactionMetrics::new().unwrap(),
        )
    }

    #[tokio::test]
    async fn create_persists_counts_and_notifies() {
        let repository = Arc::new(MemoryTransactionRepository::default());
        let (notifier, mut received) = RecordingNotifier::new();
        let service = service_with(
            repository.clone(),
            Arc::new(MemoryCache::new()),
            Arc::new(notifier),
        );

        let created = service.create_transaction(coffee()).await.unwrap();

        assert_eq!(created.status, "completed");
        assert_eq!(repository.len().await, 1);
        assert_eq!(service.metrics().transactions_total.get(), 1);
        assert_eq!(received.recv().await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let repository = Arc::new(MemoryTransactionRepository::default());
        let (notifier, _received) = RecordingNotifier::new();
        let service = service_with(repository, Arc::new(NoCache), Arc::new(notifier));

        let first = service.create_transaction(coffee()).await.unwrap();
        let second = service.create_transaction(coffee()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn create_succeeds_when_webhook_fails() {
        let repository = Arc::new(MemoryTransactionRepository::default());
        let service = service_with(
            repository.clone(),
            Arc::new(NoCache),
            Arc::new(FailingNotifier),
        );

        let created = service.create_transaction(coffee()).await.unwrap();

        assert_eq!(repository.len().await, 1);
        assert_eq!(created.description, "coffee");
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let repository = Arc::new(MemoryTransactionRepository::default());
        let (notifier, _received) = RecordingNotifier::new();
        let service = service_with(
            repository.clone(),
            Arc::new(MemoryCache::new()),
            Arc::new(notifier),
        );
        let created = service.create_transaction(coffee()).await.unwrap();

        let first = service.get_transaction(&created.id).await.unwrap();
        let second = service.get_transaction(&created.id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.amount, created.amount);
        assert_eq!(repository.lookups(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn read_after_ttl_goes_back_to_store() {
        let repository = Arc::new(MemoryTransactionRepository::default());
        let (notifier, _received) = RecordingNotifier::new();
        let service = service_with(
            repository.clone(),
            Arc::new(MemoryCache::new()),
            Arc::new(notifier),
        );
        let created = service.create_transaction(coffee()).await.unwrap();

        service.get_transaction(&created.id).await.unwrap();
        tokio::time::advance(CACHE_TTL - Duration::from_secs(1)).await;
        service.get_transaction(&created.id).await.unwrap();
        assert_eq!(repository.lookups(), 1);

        tokio::time::advance(Duration::from_secs(1)).await;
        service.get_transaction(&created.id).await.unwrap();
        assert_eq!(repository.lookups(), 2);
    }

    #[tokio::test]
    async fn missing_id_is_not_found_and_leaves_cache_empty() {
        let repository = Arc::new(MemoryTransactionRepository::default());
        let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new());
        let (notifier, _received) = RecordingNotifier::new();
        let service = service_with(repository, Arc::clone(&cache), Arc::new(notifier));

        let result = service.get_transaction("does-not-exist").await;

        assert!(matches!(result, Err(AppError::TransactionNotFound)));
        assert_eq!(cache.get(&cache_key("does-not-exist")).await.unwrap(), None);
    }

    #[test]
    fn cache_key_is_derived_from_id() {
        assert_eq!(cache_key("abc"), "transaction:abc");
    }
}
