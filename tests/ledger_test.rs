mod common;

use anyhow::Result;
use common::{parse_timestamp, test_service};
use florin::application::LedgerService;

#[tokio::test]
async fn test_added_transaction_appears_in_display_list() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let recorded = service.add_transaction("100.00", "Income").await?;

    let transactions = service.transactions_for_display().await?;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].id, recorded.id);
    assert_eq!(transactions[0].amount, 100.0);
    assert_eq!(transactions[0].category, "Income");
    assert_eq!(transactions[0].timestamp, recorded.timestamp);

    Ok(())
}

#[tokio::test]
async fn test_assigned_ids_are_unique_and_increasing() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let mut ids = Vec::new();
    for _ in 0..5 {
        let transaction = service.add_transaction("10", "Food").await?;
        ids.push(transaction.id);
    }

    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0], "ids must keep increasing: {:?}", ids);
    }

    Ok(())
}

#[tokio::test]
async fn test_display_list_is_most_recent_first() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let t1 = service
        .add_transaction_at("10", "Food", parse_timestamp("2025-01-01 09:00:00"))
        .await?;
    let t2 = service
        .add_transaction_at("20", "Rent", parse_timestamp("2025-01-02 09:00:00"))
        .await?;
    let t3 = service
        .add_transaction_at("30", "Other", parse_timestamp("2025-01-03 09:00:00"))
        .await?;

    let transactions = service.transactions_for_display().await?;
    let ids: Vec<_> = transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![t3.id, t2.id, t1.id]);

    Ok(())
}

#[tokio::test]
async fn test_same_second_ties_break_by_reverse_insertion() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let timestamp = parse_timestamp("2025-01-15 12:00:00");
    let t1 = service.add_transaction_at("10", "Food", timestamp).await?;
    let t2 = service.add_transaction_at("20", "Food", timestamp).await?;
    let t3 = service.add_transaction_at("30", "Food", timestamp).await?;

    let transactions = service.transactions_for_display().await?;
    let ids: Vec<_> = transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![t3.id, t2.id, t1.id]);

    Ok(())
}

#[tokio::test]
async fn test_empty_ledger_queries() -> Result<()> {
    let (service, _temp) = test_service().await?;

    assert!(service.transactions_for_display().await?.is_empty());
    assert!(service.category_breakdown().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_category_breakdown_sums_amounts() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.add_transaction("100.00", "Income").await?;
    service.add_transaction("50.00", "Food").await?;
    service.add_transaction("25.50", "Food").await?;

    let breakdown = service.category_breakdown().await?;
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown.get("Income"), Some(&100.0));
    assert_eq!(breakdown.get("Food"), Some(&75.5));

    let transactions = service.transactions_for_display().await?;
    assert_eq!(transactions.len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_clear_history_empties_ledger() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.add_transaction("100.00", "Income").await?;
    service.add_transaction("50.00", "Rent").await?;

    service.clear_history().await?;

    assert!(service.transactions_for_display().await?.is_empty());
    assert!(service.category_breakdown().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_clear_history_is_idempotent() -> Result<()> {
    let (service, _temp) = test_service().await?;

    // Clearing an empty ledger is not an error
    service.clear_history().await?;

    service.add_transaction("10", "Other").await?;
    service.clear_history().await?;
    service.clear_history().await?;

    assert!(service.transactions_for_display().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_ids_are_not_reused_after_clear() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let before = service.add_transaction("10", "Food").await?;
    service.clear_history().await?;
    let after = service.add_transaction("20", "Food").await?;

    assert!(after.id > before.id);

    Ok(())
}

#[tokio::test]
async fn test_ledger_persists_across_reopen() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let db_path = temp_dir.path().join("ledger.db");
    let path = db_path.to_str().unwrap();

    let service = LedgerService::open(path).await?;
    service.add_transaction("42.00", "Other").await?;
    drop(service);

    let reopened = LedgerService::open(path).await?;
    let transactions = reopened.transactions_for_display().await?;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].category, "Other");
    assert_eq!(transactions[0].amount, 42.0);

    Ok(())
}
