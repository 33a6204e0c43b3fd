use super::*;

/// Tests clearing optional fields.
///
/// Verifies that `Some(None)` clears the code while a `None` description is
/// left unchanged.
///
/// Expected: Ok(Some) with the code removed and the description kept
#[tokio::test]
async fn clears_code_and_keeps_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::budget_owner::BudgetOwnerFactory::new(db)
        .code(Some("OPS"))
        .description(Some("Operations"))
        .build()
        .await?;

    let updated = BudgetOwnerRepository::new(db)
        .update(UpdateBudgetOwnerParams {
            id: owner.id,
            code: Some(None),
            status: Some(Status::Inactive),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.code, None);
    assert_eq!(updated.description.as_deref(), Some("Operations"));
    assert_eq!(updated.status, Status::Inactive);

    Ok(())
}

/// Tests updating an owner that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BudgetOwnerRepository::new(db)
        .update(UpdateBudgetOwnerParams {
            id: 999,
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
