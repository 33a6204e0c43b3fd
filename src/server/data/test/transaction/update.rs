use super::*;

/// Tests a partial transaction update.
///
/// Verifies that given fields change, the receipt can be cleared, and the
/// creator is left untouched.
///
/// Expected: Ok(Some) with the new amount and no receipt
#[tokio::test]
async fn updates_amount_and_clears_receipt() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    let category = factory::category::create_category(db).await?;
    let transaction =
        factory::transaction::TransactionFactory::new(db, owner.id, category.id, user.id)
            .receipt_url(Some("https://receipts.example.com/1.pdf"))
            .build()
            .await?;

    let updated = TransactionRepository::new(db)
        .update(UpdateTransactionParams {
            id: transaction.id,
            amount: Some(42.0),
            receipt_url: Some(None),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.amount, 42.0);
    assert_eq!(updated.receipt_url, None);
    assert_eq!(updated.created_by, user.id);
    assert_eq!(updated.description, transaction.description);

    Ok(())
}

/// Tests deleting a transaction.
///
/// Expected: Ok(true), then Ok(false) on a second delete
#[tokio::test]
async fn deletes_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, transaction) =
        factory::helpers::create_transaction_with_dependencies(db).await?;

    let repo = TransactionRepository::new(db);
    assert!(repo.delete(transaction.id).await?);
    assert!(!repo.delete(transaction.id).await?);

    Ok(())
}
