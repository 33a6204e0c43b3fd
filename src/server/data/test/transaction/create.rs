use super::*;

/// Tests creating a transaction.
///
/// Verifies that the returned transaction carries the owner, category and
/// creator names.
///
/// Expected: Ok with related names filled in
#[tokio::test]
async fn creates_transaction_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).name("Dana").build().await?;
    let owner = factory::budget_owner::BudgetOwnerFactory::new(db)
        .name("Marketing")
        .build()
        .await?;
    let category = factory::category::CategoryFactory::new(db)
        .name("Advertising")
        .build()
        .await?;

    let transaction = TransactionRepository::new(db)
        .create(CreateTransactionParams {
            budget_owner_id: owner.id,
            category_id: category.id,
            date: Utc.with_ymd_and_hms(2025, 4, 2, 9, 30, 0).unwrap(),
            amount: 2_500.0,
            description: "Billboard".to_string(),
            receipt_url: None,
            created_by: user.id,
        })
        .await?;

    assert_eq!(transaction.budget_owner_name, "Marketing");
    assert_eq!(transaction.category_name, "Advertising");
    assert_eq!(transaction.created_by_name, "Dana");
    assert_eq!(transaction.amount, 2_500.0);

    Ok(())
}
