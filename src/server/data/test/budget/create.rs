use super::*;

/// Tests creating a budget.
///
/// Verifies that the returned budget carries its owner's name.
///
/// Expected: Ok with the owner name filled in
#[tokio::test]
async fn creates_budget_with_owner_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::BudgetOwnerFactory::new(db)
        .name("Finance")
        .build()
        .await?;

    let repo = BudgetRepository::new(db);
    let budget = repo
        .create(CreateBudgetParams {
            budget_owner_id: owner.id,
            year: 2025,
            amount_planned: 500_000.0,
            amount_revised: Some(450_000.0),
            created_by: user.id,
        })
        .await?;

    assert_eq!(budget.budget_owner_name, "Finance");
    assert_eq!(budget.year, 2025);
    assert_eq!(budget.amount_revised, Some(450_000.0));

    let found = repo.find_by_owner_and_year(owner.id, 2025).await?;
    assert_eq!(found.map(|b| b.id), Some(budget.id));
    assert!(repo.find_by_owner_and_year(owner.id, 2026).await?.is_none());

    Ok(())
}
