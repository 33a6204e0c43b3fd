use super::*;

/// Tests that transactions are listed newest first within the scope.
///
/// Expected: Ok with the visible owner's transactions in date descending order
#[tokio::test]
async fn lists_scoped_transactions_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let visible = factory::budget_owner::create_budget_owner(db).await?;
    let hidden = factory::budget_owner::create_budget_owner(db).await?;
    let category = factory::category::create_category(db).await?;

    let older = factory::transaction::TransactionFactory::new(db, visible.id, category.id, user.id)
        .date(Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap())
        .build()
        .await?;
    let newer = factory::transaction::TransactionFactory::new(db, visible.id, category.id, user.id)
        .date(Utc.with_ymd_and_hms(2025, 2, 10, 0, 0, 0).unwrap())
        .build()
        .await?;
    factory::transaction::create_transaction(db, hidden.id, category.id, user.id).await?;

    let page = TransactionRepository::new(db)
        .get_paginated(
            &OwnerScope::Only(vec![visible.id]),
            TransactionFilter::default(),
            PageRequest::default(),
        )
        .await?;

    let ids: Vec<_> = page.items.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests that the end date includes the whole day.
///
/// Verifies that a transaction late on the end date is returned while one on
/// the following day is not.
///
/// Expected: Ok with only the transaction inside the range
#[tokio::test]
async fn end_date_is_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    let category = factory::category::create_category(db).await?;

    let inside = factory::transaction::TransactionFactory::new(db, owner.id, category.id, user.id)
        .date(Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 0).unwrap())
        .build()
        .await?;
    factory::transaction::TransactionFactory::new(db, owner.id, category.id, user.id)
        .date(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap())
        .build()
        .await?;
    factory::transaction::TransactionFactory::new(db, owner.id, category.id, user.id)
        .date(Utc.with_ymd_and_hms(2025, 2, 28, 12, 0, 0).unwrap())
        .build()
        .await?;

    let page = TransactionRepository::new(db)
        .get_paginated(
            &OwnerScope::All,
            TransactionFilter {
                start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
                end_date: NaiveDate::from_ymd_opt(2025, 3, 31),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, inside.id);

    Ok(())
}

/// Tests filtering on several categories and a year.
///
/// Expected: Ok with transactions from the listed categories in that year
#[tokio::test]
async fn filters_by_categories_and_year() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    let travel = factory::category::create_category(db).await?;
    let meals = factory::category::create_category(db).await?;
    let rent = factory::category::create_category(db).await?;

    for category_id in [travel.id, meals.id, rent.id] {
        factory::transaction::TransactionFactory::new(db, owner.id, category_id, user.id)
            .date(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap())
            .build()
            .await?;
    }
    factory::transaction::TransactionFactory::new(db, owner.id, travel.id, user.id)
        .date(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
        .build()
        .await?;

    let page = TransactionRepository::new(db)
        .get_paginated(
            &OwnerScope::All,
            TransactionFilter {
                category_ids: Some(vec![travel.id, meals.id]),
                year: Some(2025),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total, 2);
    assert!(page
        .items
        .iter()
        .all(|t| t.category_id == travel.id || t.category_id == meals.id));

    Ok(())
}
