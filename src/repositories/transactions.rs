//! Persistence for the `transactions` table.

use async_trait::async_trait;

use crate::db::DbPool;
use crate::models::transaction::{NewTransaction, Transaction};

/// Insert-and-lookup access to stored transactions.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Persist a new row and return it as stored.
    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, sqlx::Error>;

    /// Look up a row by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Transaction>, sqlx::Error>;
}

/// PostgreSQL-backed transaction store.
#[derive(Debug, Clone)]
pub struct PgTransactionRepository {
    pool: DbPool,
}

impl PgTransactionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (id, amount, user_id, description, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, amount, user_id, description, created_at, status
            "#,
        )
        .bind(transaction.id)
        .bind(transaction.amount)
        .bind(transaction.user_id)
        .bind(transaction.description)
        .bind(transaction.status)
        .bind(transaction.created_at)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Transaction>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, amount, user_id, description, created_at, status
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
