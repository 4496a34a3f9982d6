use std::collections::HashMap;

use chrono::NaiveDateTime;
use sqlx::{Row, SqlitePool};
use thiserror::Error;

use crate::domain::{Amount, TIMESTAMP_FORMAT, Transaction, TransactionId};

use super::MIGRATION_001_TRANSACTIONS;

/// Errors surfaced by the transaction store. The store never retries on its
/// own; callers decide whether a failed operation is worth repeating.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The database could not be opened or its schema prepared.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// An insert or delete failed to commit. Nothing durable happened.
    #[error("storage write failed: {0}")]
    Write(#[source] sqlx::Error),

    /// A query failed.
    #[error("storage read failed: {0}")]
    Read(#[source] sqlx::Error),

    /// A stored row no longer decodes into a transaction.
    #[error("stored transaction {id} is malformed: {reason}")]
    Corrupt { id: TransactionId, reason: String },
}

/// SQLite-backed store for the transaction ledger.
///
/// The store persists and queries transactions verbatim: positive amounts
/// and known categories are the caller's contract, not enforced here.
/// Every mutation is committed before the call returns.
pub struct TransactionStore {
    pool: SqlitePool,
}

impl TransactionStore {
    /// Create a store over an existing SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at the given path, creating the file if it doesn't
    /// exist, and ensure the schema is in place. Safe to call every startup.
    pub async fn open(path: &str) -> Result<Self, StorageError> {
        let url = format!("sqlite:{}?mode=rwc", path);
        let pool = SqlitePool::connect(&url)
            .await
            .map_err(StorageError::Unavailable)?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Run the idempotent schema migration.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::query(MIGRATION_001_TRANSACTIONS)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Unavailable)?;
        Ok(())
    }

    /// Append a transaction and return the id the database assigned to it.
    pub async fn insert(
        &self,
        amount: Amount,
        category: &str,
        timestamp: NaiveDateTime,
    ) -> Result<TransactionId, StorageError> {
        let row = sqlx::query(
            r#"
            INSERT INTO transactions (amount, category, timestamp)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(amount)
        .bind(category)
        .bind(timestamp.format(TIMESTAMP_FORMAT).to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::Write)?;

        Ok(row.get("id"))
    }

    /// Every stored transaction, most recent first. Transactions sharing a
    /// second come back in reverse insertion order.
    pub async fn list_all(&self) -> Result<Vec<Transaction>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, amount, category, timestamp
            FROM transactions
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Read)?;

        rows.iter().map(Self::row_to_transaction).collect()
    }

    /// Sum of amounts per distinct category present in the ledger.
    /// An empty ledger yields an empty map.
    pub async fn aggregate_by_category(&self) -> Result<HashMap<String, Amount>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT category, SUM(amount) AS total
            FROM transactions
            GROUP BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Read)?;

        let mut totals = HashMap::new();
        for row in rows {
            let category: String = row.get("category");
            let total: Amount = row.get("total");
            totals.insert(category, total);
        }

        Ok(totals)
    }

    /// Delete every transaction. Clearing an empty ledger is a no-op.
    pub async fn clear_all(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM transactions")
            .execute(&self.pool)
            .await
            .map_err(StorageError::Write)?;
        Ok(())
    }

    fn row_to_transaction(row: &sqlx::sqlite::SqliteRow) -> Result<Transaction, StorageError> {
        let id: TransactionId = row.get("id");
        let timestamp_str: String = row.get("timestamp");

        let timestamp = NaiveDateTime::parse_from_str(&timestamp_str, TIMESTAMP_FORMAT).map_err(
            |e| StorageError::Corrupt {
                id,
                reason: e.to_string(),
            },
        )?;

        Ok(Transaction {
            id,
            amount: row.get("amount"),
            category: row.get("category"),
            timestamp,
        })
    }
}
