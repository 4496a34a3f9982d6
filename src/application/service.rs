use std::collections::HashMap;

use chrono::{Local, NaiveDateTime, Timelike};

use crate::domain::{Amount, Category, Transaction, UNSELECTED_CATEGORY, parse_amount};
use crate::storage::TransactionStore;

use super::{AppError, BreakdownReport};

/// Application service providing the ledger operations consumed by any
/// client (CLI, UI, charting). This is the boundary between raw
/// user-entered strings and typed records.
pub struct LedgerService {
    store: TransactionStore,
}

impl LedgerService {
    /// Create a new ledger service with the given store.
    pub fn new(store: TransactionStore) -> Self {
        Self { store }
    }

    /// Open (or create) the database at the given path and wrap it in a
    /// service. Fails when the store cannot be opened; the caller should
    /// not proceed without one.
    pub async fn open(database_path: &str) -> Result<Self, AppError> {
        let store = TransactionStore::open(database_path).await?;
        Ok(Self::new(store))
    }

    /// Validate raw user input and record a transaction stamped with the
    /// current time.
    pub async fn add_transaction(
        &self,
        raw_amount: &str,
        category: &str,
    ) -> Result<Transaction, AppError> {
        let now = Local::now().naive_local();
        // Timestamps are stored at second precision.
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        self.add_transaction_at(raw_amount, category, timestamp).await
    }

    /// Record a transaction with an explicit timestamp (backdated entries).
    ///
    /// Validation order: amount first, then category. A store failure
    /// propagates unchanged; no retries.
    pub async fn add_transaction_at(
        &self,
        raw_amount: &str,
        category: &str,
        timestamp: NaiveDateTime,
    ) -> Result<Transaction, AppError> {
        let amount =
            parse_amount(raw_amount).map_err(|e| AppError::InvalidAmount(e.to_string()))?;

        let category = category.trim();
        if category.is_empty() || category == UNSELECTED_CATEGORY {
            return Err(AppError::NoCategorySelected);
        }
        let category = Category::from_str(category)
            .ok_or_else(|| AppError::UnknownCategory(category.to_string()))?;

        let id = self
            .store
            .insert(amount, category.as_str(), timestamp)
            .await?;

        Ok(Transaction {
            id,
            amount,
            category: category.as_str().to_string(),
            timestamp,
        })
    }

    /// All transactions, most recent first.
    pub async fn transactions_for_display(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.store.list_all().await?)
    }

    /// Total amount recorded per category.
    pub async fn category_breakdown(&self) -> Result<HashMap<String, Amount>, AppError> {
        Ok(self.store.aggregate_by_category().await?)
    }

    /// Breakdown with per-category percentage shares, largest first.
    pub async fn breakdown_report(&self) -> Result<BreakdownReport, AppError> {
        let totals = self.store.aggregate_by_category().await?;
        Ok(BreakdownReport::from_totals(totals))
    }

    /// Irreversibly wipe the whole transaction history.
    pub async fn clear_history(&self) -> Result<(), AppError> {
        Ok(self.store.clear_all().await?)
    }
}
