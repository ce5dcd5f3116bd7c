//! Notification Service - Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool (and schema, if namespaced)
//! 3. Run database migrations
//! 4. Build the service and router
//! 5. Start server on configured port

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use txn_notify::{
    app,
    config::NotificationConfig,
    db,
    metrics::NotificationMetrics,
    repositories::PgNotificationRepository,
    services::notification_service::NotificationService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = NotificationConfig::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(
        &config.database_url,
        config.database_schema.as_deref(),
        config.database_max_connections,
    )
    .await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool, &db::NOTIFICATION_MIGRATIONS).await?;
    tracing::info!("Database migrations complete");

    let service = NotificationService::new(
        Arc::new(PgNotificationRepository::new(pool)),
        NotificationMetrics::new()?,
    );

    let router = app::notification_router(service);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Notification service listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
