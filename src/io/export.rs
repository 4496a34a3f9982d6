use std::io::Write;

use anyhow::Result;

use crate::application::LedgerService;
use crate::domain::format_amount;

/// Exporter for writing ledger data out as CSV.
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export all transactions to CSV, most recent first.
    pub async fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let transactions = self.service.transactions_for_display().await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["id", "timestamp", "category", "amount"])?;

        let mut count = 0;
        for transaction in &transactions {
            csv_writer.write_record([
                transaction.id.to_string(),
                transaction.formatted_timestamp(),
                transaction.category.clone(),
                format_amount(transaction.amount),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the category breakdown to CSV.
    pub async fn export_breakdown_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let report = self.service.breakdown_report().await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["category", "total", "percentage"])?;

        let mut count = 0;
        for share in &report.categories {
            csv_writer.write_record([
                share.category.clone(),
                format_amount(share.total),
                format!("{:.1}", share.percentage),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }
}
