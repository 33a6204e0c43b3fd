use super::*;

/// Tests summing an owner's spending for a year.
///
/// Verifies that transactions on the first instant of the year count, those
/// on the first instant of the next year don't, and other owners are ignored.
///
/// Expected: Ok with the in-year sum and count
#[tokio::test]
async fn sums_transactions_within_year() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    let other = factory::budget_owner::create_budget_owner(db).await?;
    let category = factory::category::create_category(db).await?;

    for (owner_id, date, amount) in [
        (owner.id, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(), 100.25),
        (owner.id, Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap(), 200.5),
        (owner.id, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(), 999.0),
        (other.id, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(), 50.0),
    ] {
        factory::transaction::TransactionFactory::new(db, owner_id, category.id, user.id)
            .date(date)
            .amount(amount)
            .build()
            .await?;
    }

    let totals = TransactionRepository::new(db)
        .totals_for_owner_year(owner.id, 2025)
        .await?;

    assert_eq!(totals.spent, 300.75);
    assert_eq!(totals.transaction_count, 2);

    Ok(())
}

/// Tests an owner without transactions.
///
/// Expected: Ok with zero spent and zero count
#[tokio::test]
async fn returns_zero_without_transactions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::budget_owner::create_budget_owner(db).await?;

    let totals = TransactionRepository::new(db)
        .totals_for_owner_year(owner.id, 2025)
        .await?;

    assert_eq!(totals.spent, 0.0);
    assert_eq!(totals.transaction_count, 0);

    Ok(())
}
