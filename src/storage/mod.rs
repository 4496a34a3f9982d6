mod store;

pub use store::*;

/// SQL migration for the ledger schema
pub const MIGRATION_001_TRANSACTIONS: &str = include_str!("migrations/001_transactions.sql");
