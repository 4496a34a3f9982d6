use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::application::LedgerService;
use crate::domain::{Category, format_amount};

/// Florin - Personal Finance Tracker
#[derive(Parser)]
#[command(name = "florin")]
#[command(about = "A local-first tracker for everyday income and spending")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "florin.db")]
    pub database: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record a transaction
    Add {
        /// Amount in currency units (e.g., "25.50" or "25")
        amount: String,

        /// Category: Income, Rent, Food, Entertainment, Other
        category: String,

        /// Date of the transaction (YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date: Option<String>,
    },

    /// List recorded transactions, most recent first
    History,

    /// Show how spending splits across categories
    Breakdown {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List the categories transactions can be filed under
    Categories,

    /// Delete the entire transaction history
    Clear,

    /// Export data to CSV
    Export {
        /// What to export: transactions, breakdown
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                LedgerService::open(&self.database).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Add {
                amount,
                category,
                date,
            } => {
                let service = LedgerService::open(&self.database).await?;

                let transaction = match date {
                    Some(date_str) => {
                        let timestamp = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                            .with_context(|| {
                                format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)
                            })?
                            .and_hms_opt(0, 0, 0)
                            .context("Invalid date")?;
                        service
                            .add_transaction_at(&amount, &category, timestamp)
                            .await?
                    }
                    None => service.add_transaction(&amount, &category).await?,
                };

                println!(
                    "Recorded transaction #{}: {} {} ({})",
                    transaction.id,
                    format_amount(transaction.amount),
                    transaction.category,
                    transaction.formatted_timestamp()
                );
            }

            Commands::History => {
                let service = LedgerService::open(&self.database).await?;
                let transactions = service.transactions_for_display().await?;

                if transactions.is_empty() {
                    println!("No transactions yet.");
                } else {
                    println!(
                        "{:<6} {:<20} {:<15} {:>12}",
                        "ID", "DATE", "CATEGORY", "AMOUNT"
                    );
                    println!("{}", "-".repeat(56));
                    for transaction in transactions {
                        println!(
                            "{:<6} {:<20} {:<15} {:>12}",
                            transaction.id,
                            transaction.formatted_timestamp(),
                            transaction.category,
                            format_amount(transaction.amount)
                        );
                    }
                }
            }

            Commands::Breakdown { format } => {
                let service = LedgerService::open(&self.database).await?;
                let report = service.breakdown_report().await?;

                match format.as_str() {
                    "json" => {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    }
                    "csv" => {
                        println!("category,total,percentage");
                        for share in &report.categories {
                            println!(
                                "{},{},{:.1}",
                                share.category,
                                format_amount(share.total),
                                share.percentage
                            );
                        }
                    }
                    _ => {
                        // Table format
                        if report.categories.is_empty() {
                            println!("No data to display.");
                        } else {
                            println!("{:<15} {:>12} {:>8}", "CATEGORY", "TOTAL", "PERCENT");
                            println!("{}", "-".repeat(37));
                            for share in &report.categories {
                                println!(
                                    "{:<15} {:>12} {:>7.1}%",
                                    share.category,
                                    format_amount(share.total),
                                    share.percentage
                                );
                            }
                            println!("{}", "-".repeat(37));
                            println!("{:<15} {:>12}", "TOTAL", format_amount(report.total));
                        }
                    }
                }
            }

            Commands::Categories => {
                for category in Category::ALL {
                    println!("{}", category);
                }
            }

            Commands::Clear => {
                let service = LedgerService::open(&self.database).await?;
                service.clear_history().await?;
                println!("Transaction history cleared.");
            }

            Commands::Export {
                export_type,
                output,
            } => {
                let service = LedgerService::open(&self.database).await?;
                run_export_command(&service, &export_type, output.as_deref()).await?;
            }
        }

        Ok(())
    }
}

async fn run_export_command(
    service: &LedgerService,
    export_type: &str,
    output: Option<&str>,
) -> Result<()> {
    use std::fs::File;
    use std::io::{Write, stdout};

    use crate::io::Exporter;

    let exporter = Exporter::new(service);

    // Determine output writer
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match export_type {
        "transactions" => {
            let count = exporter.export_transactions_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} transactions", count);
            }
        }
        "breakdown" => {
            let count = exporter.export_breakdown_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} categories", count);
            }
        }
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: transactions, breakdown",
                export_type
            );
        }
    }

    Ok(())
}
