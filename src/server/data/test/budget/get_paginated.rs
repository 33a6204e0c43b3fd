use super::*;

/// Tests filtering budgets by year within a scope.
///
/// Verifies that owners outside the scope and other years are excluded.
///
/// Expected: Ok with the single visible budget for the year
#[tokio::test]
async fn filters_by_year_and_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let visible = factory::budget_owner::create_budget_owner(db).await?;
    let hidden = factory::budget_owner::create_budget_owner(db).await?;

    let expected = factory::budget::BudgetFactory::new(db, visible.id, user.id)
        .year(2025)
        .build()
        .await?;
    factory::budget::BudgetFactory::new(db, visible.id, user.id)
        .year(2024)
        .build()
        .await?;
    factory::budget::BudgetFactory::new(db, hidden.id, user.id)
        .year(2025)
        .build()
        .await?;

    let page = BudgetRepository::new(db)
        .get_paginated(
            &OwnerScope::Only(vec![visible.id]),
            BudgetFilter {
                year: Some(2025),
                budget_owner_id: None,
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, expected.id);

    Ok(())
}

/// Tests the default ordering.
///
/// Verifies budgets are ordered by year descending, then by owner name.
///
/// Expected: Ok with budgets in year then owner name order
#[tokio::test]
async fn orders_by_year_then_owner_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let beta = factory::budget_owner::BudgetOwnerFactory::new(db)
        .name("Beta")
        .build()
        .await?;
    let alpha = factory::budget_owner::BudgetOwnerFactory::new(db)
        .name("Alpha")
        .build()
        .await?;

    for (owner_id, year) in [(beta.id, 2025), (alpha.id, 2024), (alpha.id, 2025)] {
        factory::budget::BudgetFactory::new(db, owner_id, user.id)
            .year(year)
            .build()
            .await?;
    }

    let page = BudgetRepository::new(db)
        .get_paginated(&OwnerScope::All, BudgetFilter::default(), PageRequest::default())
        .await?;

    let order: Vec<_> = page
        .items
        .iter()
        .map(|b| (b.year, b.budget_owner_name.as_str()))
        .collect();
    assert_eq!(order, vec![(2025, "Alpha"), (2025, "Beta"), (2024, "Alpha")]);

    Ok(())
}
