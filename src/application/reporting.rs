use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::Amount;

/// Proportional view of the ledger, ready for a chart or table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownReport {
    pub categories: Vec<CategoryShare>,
    pub total: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Amount,
    pub percentage: f64,
}

impl BreakdownReport {
    /// Build a report from raw category totals, largest share first.
    /// Equal totals tie-break alphabetically so the output is stable.
    pub fn from_totals(totals: HashMap<String, Amount>) -> Self {
        let total: Amount = totals.values().sum();

        let mut categories: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, subtotal)| CategoryShare {
                category,
                total: subtotal,
                percentage: if total > 0.0 {
                    subtotal / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self { categories, total }
    }
}
