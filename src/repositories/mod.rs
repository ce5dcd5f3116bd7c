//! Storage seams for the two services.
//!
//! Services talk to their table through these traits so the cache and
//! webhook logic can be exercised against in-memory stores in tests.

pub mod notifications;
pub mod transactions;

pub use notifications::{NotificationRepository, PgNotificationRepository};
pub use transactions::{PgTransactionRepository, TransactionRepository};
