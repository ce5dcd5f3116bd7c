//! Transaction and Notification services.
//!
//! Two small REST services that share this library:
//!
//! - **Transaction Service**: stores transactions, serves them cache-first
//!   and tells the Notification Service about each new one
//! - **Notification Service**: turns those webhooks into stored messages
//!   and lists them per user
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Cache**: Redis, in-process, or disabled
//! - **Webhook**: reqwest, fire-and-forget
//! - **Metrics**: Prometheus text exposition

pub mod app;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;

#[cfg(test)]
mod testing;
