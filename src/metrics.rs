//! Prometheus counters for both services.
//!
//! Each service owns a private `Registry` so the two binaries (and parallel
//! tests) never share counter state.

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Counters exported by the Transaction Service on `GET /metrics`.
#[derive(Clone)]
pub struct TransactionMetrics {
    registry: Registry,
    /// Transactions successfully persisted.
    pub transactions_total: IntCounter,
    /// Calls to `GET /health`.
    pub health_checks_total: IntCounter,
    /// Outbound webhooks that failed and were dropped.
    pub webhook_failures_total: IntCounter,
}

impl TransactionMetrics {
    /// Create and register the counters.
    ///
    /// # Errors
    ///
    /// Returns an error if a counter name is invalid or registered twice.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let transactions_total =
            IntCounter::new("transactions_total", "Total transactions created")?;
        let health_checks_total = IntCounter::new("health_checks_total", "Total health checks")?;
        let webhook_failures_total = IntCounter::new(
            "notification_webhook_failures_total",
            "Transaction webhooks that could not be delivered",
        )?;

        registry.register(Box::new(transactions_total.clone()))?;
        registry.register(Box::new(health_checks_total.clone()))?;
        registry.register(Box::new(webhook_failures_total.clone()))?;

        Ok(Self {
            registry,
            transactions_total,
            health_checks_total,
            webhook_failures_total,
        })
    }

    /// Render all counters in the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        encode(&self.registry)
    }
}

/// Counters exported by the Notification Service on `GET /metrics`.
#[derive(Clone)]
pub struct NotificationMetrics {
    registry: Registry,
    /// Notifications recorded from incoming webhooks.
    pub notifications_total: IntCounter,
    /// Calls to `GET /health`.
    pub health_checks_total: IntCounter,
}

impl NotificationMetrics {
    /// Create and register the counters.
    ///
    /// # Errors
    ///
    /// Returns an error if a counter name is invalid or registered twice.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let notifications_total =
            IntCounter::new("notifications_total", "Total notifications recorded")?;
        let health_checks_total = IntCounter::new("health_checks_total", "Total health checks")?;

        registry.register(Box::new(notifications_total.clone()))?;
        registry.register(Box::new(health_checks_total.clone()))?;

        Ok(Self {
            registry,
            notifications_total,
            health_checks_total,
        })
    }

    /// Render all counters in the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        encode(&self.registry)
    }
}

/// Content type of rendered metrics.
pub fn content_type() -> String {
    TextEncoder::new().format_type().to_string()
}

fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
