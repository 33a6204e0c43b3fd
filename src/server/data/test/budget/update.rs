use super::*;

/// Tests clearing the revised amount.
///
/// Expected: Ok(Some) with the planned amount changed and no revision
#[tokio::test]
async fn updates_planned_and_clears_revised() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    let budget = factory::budget::BudgetFactory::new(db, owner.id, user.id)
        .amount_revised(Some(900.0))
        .build()
        .await?;

    let updated = BudgetRepository::new(db)
        .update(UpdateBudgetParams {
            id: budget.id,
            amount_planned: Some(1_200.0),
            amount_revised: Some(None),
        })
        .await?
        .unwrap();

    assert_eq!(updated.amount_planned, 1_200.0);
    assert_eq!(updated.amount_revised, None);

    Ok(())
}

/// Tests deleting a budget.
///
/// Expected: Ok(true) and the budget is gone
#[tokio::test]
async fn deletes_budget() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, budget) = factory::helpers::create_budget_with_dependencies(db).await?;

    let repo = BudgetRepository::new(db);
    assert!(repo.delete(budget.id).await?);
    assert!(repo.find_by_id(budget.id).await?.is_none());

    Ok(())
}
