use super::*;

/// Tests that a restricted scope hides other owners.
///
/// Verifies that only owners listed in the scope are returned and counted.
///
/// Expected: Ok with only the granted owner
#[tokio::test]
async fn limits_results_to_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let visible = factory::budget_owner::create_budget_owner(db).await?;
    factory::budget_owner::create_budget_owner(db).await?;

    let page = BudgetOwnerRepository::new(db)
        .get_paginated(
            &OwnerScope::Only(vec![visible.id]),
            BudgetOwnerFilter::default(),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, visible.id);

    Ok(())
}

/// Tests that an empty scope returns nothing.
///
/// Expected: Ok with no owners
#[tokio::test]
async fn empty_scope_returns_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::budget_owner::create_budget_owner(db).await?;

    let page = BudgetOwnerRepository::new(db)
        .get_paginated(
            &OwnerScope::Only(vec![]),
            BudgetOwnerFilter::default(),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());

    Ok(())
}

/// Tests search and status filters.
///
/// Verifies that search matches the name or the code regardless of case and
/// that the status filter excludes inactive owners.
///
/// Expected: Ok with only the matching active owners
#[tokio::test]
async fn filters_by_search_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::budget_owner::BudgetOwnerFactory::new(db)
        .name("Marketing")
        .code(Some("MKT"))
        .build()
        .await?;
    factory::budget_owner::BudgetOwnerFactory::new(db)
        .name("Human Resources")
        .code(Some("HR"))
        .build()
        .await?;
    factory::budget_owner::BudgetOwnerFactory::new(db)
        .name("Market Research")
        .code(Some("MR"))
        .status("INACTIVE")
        .build()
        .await?;

    let repo = BudgetOwnerRepository::new(db);

    let by_name = repo
        .get_paginated(
            &OwnerScope::All,
            BudgetOwnerFilter {
                status: None,
                search: Some("market".to_string()),
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(by_name.total, 2);

    let active_by_code = repo
        .get_paginated(
            &OwnerScope::All,
            BudgetOwnerFilter {
                status: Some(Status::Active),
                search: Some("hr".to_string()),
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(active_by_code.total, 1);
    assert_eq!(active_by_code.items[0].name, "Human Resources");

    let active_market = repo
        .get_paginated(
            &OwnerScope::All,
            BudgetOwnerFilter {
                status: Some(Status::Active),
                search: Some("Market".to_string()),
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(active_market.total, 1);
    assert_eq!(active_market.items[0].name, "Marketing");

    Ok(())
}
