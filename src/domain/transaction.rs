use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Amount;

pub type TransactionId = i64;

/// Storage and display format for timestamps. Lexically sortable, second
/// precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single recorded monetary event.
///
/// Transactions are immutable once stored: the ledger only ever appends new
/// ones or wipes the whole history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Assigned by the store on insert. Never reused, not even after a clear.
    pub id: TransactionId,
    /// Always strictly positive; the service rejects everything else before
    /// it reaches the store.
    pub amount: Amount,
    /// Category label as recorded at creation time. The store treats this as
    /// opaque text; the service restricts it to the known set.
    pub category: String,
    /// When the transaction was recorded, second precision.
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    /// The timestamp in its canonical `YYYY-MM-DD HH:MM:SS` form.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_timestamp() {
        let timestamp =
            NaiveDateTime::parse_from_str("2025-01-15 13:45:07", TIMESTAMP_FORMAT).unwrap();
        let transaction = Transaction {
            id: 1,
            amount: 25.5,
            category: "Food".to_string(),
            timestamp,
        };

        assert_eq!(transaction.formatted_timestamp(), "2025-01-15 13:45:07");
    }
}
