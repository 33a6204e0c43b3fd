use super::*;

/// Tests listing an owner's budgets.
///
/// Verifies that only the owner's budgets are returned, newest year first.
///
/// Expected: Ok with years in descending order
#[tokio::test]
async fn returns_owner_budgets_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    let other = factory::budget_owner::create_budget_owner(db).await?;

    for year in [2023, 2025, 2024] {
        factory::budget::BudgetFactory::new(db, owner.id, user.id)
            .year(year)
            .build()
            .await?;
    }
    factory::budget::BudgetFactory::new(db, other.id, user.id)
        .year(2025)
        .build()
        .await?;

    let budgets = BudgetRepository::new(db).find_by_owner(owner.id).await?;

    let years: Vec<_> = budgets.iter().map(|b| b.year).collect();
    assert_eq!(years, vec![2025, 2024, 2023]);

    Ok(())
}
