//! Transaction Service - Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool (and schema, if namespaced)
//! 3. Run database migrations
//! 4. Connect the cache backend
//! 5. Build the webhook client, service and router
//! 6. Start server on configured port

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use txn_notify::{
    app, cache,
    config::TransactionConfig,
    db,
    metrics::TransactionMetrics,
    repositories::PgTransactionRepository,
    services::{transaction_service::TransactionService, webhook_service::HttpNotifier},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = TransactionConfig::from_env()?;
    tracing::info!(cache = ?config.cache_backend, "Configuration loaded");

    let pool = db::create_pool(
        &config.database_url,
        config.database_schema.as_deref(),
        config.database_max_connections,
    )
    .await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool, &db::TRANSACTION_MIGRATIONS).await?;
    tracing::info!("Database migrations complete");

    let cache = cache::connect(config.cache_backend, &config.redis_url).await?;
    tracing::info!("Cache ready");

    let webhook_url = config.webhook_url()?;
    let notifier = HttpNotifier::new(
        webhook_url.clone(),
        Duration::from_secs(config.notification_timeout_secs),
    )?;
    tracing::info!(%webhook_url, "Notification webhook configured");

    let service = TransactionService::new(
        Arc::new(PgTransactionRepository::new(pool)),
        cache,
        Arc::new(notifier),
        TransactionMetrics::new()?,
    );

    let router = app::transaction_router(service);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Transaction service listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
