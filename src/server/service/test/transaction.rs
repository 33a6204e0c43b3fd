use super::*;
use crate::server::{
    model::{
        pagination::PageRequest,
        scope::OwnerScope,
        transaction::{CreateTransactionParams, TransactionFilter, UpdateTransactionParams},
    },
    service::transaction::TransactionService,
};
use chrono::{NaiveDate, Utc};

/// Tests recording a transaction for an owner outside the scope.
///
/// Expected: Err(AppError::NotFound) as if the owner didn't exist
#[tokio::test]
async fn rejects_owner_outside_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    let category = factory::category::create_category(db).await?;

    let result = TransactionService::new(db)
        .create(
            CreateTransactionParams {
                budget_owner_id: owner.id,
                category_id: category.id,
                date: Utc::now(),
                amount: 10.0,
                description: "Lunch".to_string(),
                receipt_url: None,
                created_by: user.id,
            },
            &OwnerScope::Only(vec![]),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creation validation.
///
/// Expected: Err(AppError::Validation) for a zero amount and a blank description
#[tokio::test]
async fn validates_amount_and_description() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    let category = factory::category::create_category(db).await?;

    let valid = CreateTransactionParams {
        budget_owner_id: owner.id,
        category_id: category.id,
        date: Utc::now(),
        amount: 10.0,
        description: "Lunch".to_string(),
        receipt_url: Some("   ".to_string()),
        created_by: user.id,
    };

    let service = TransactionService::new(db);

    let zero_amount = service
        .create(
            CreateTransactionParams {
                amount: 0.0,
                ..valid.clone()
            },
            &OwnerScope::All,
        )
        .await;
    let blank_description = service
        .create(
            CreateTransactionParams {
                description: "  ".to_string(),
                ..valid.clone()
            },
            &OwnerScope::All,
        )
        .await;
    let created = service.create(valid, &OwnerScope::All).await?;

    assert!(matches!(zero_amount, Err(AppError::Validation(_))));
    assert!(matches!(blank_description, Err(AppError::Validation(_))));
    assert_eq!(created.receipt_url, None);

    Ok(())
}

/// Tests that only the creator or a super admin may change a transaction.
///
/// Expected: Err(AuthError::NotCreator) for another user, Ok for the creator
/// and the super admin
#[tokio::test]
async fn restricts_changes_to_creator_or_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, owner, _, transaction) =
        factory::helpers::create_transaction_with_dependencies(db).await?;
    let creator = as_user(creator);
    let colleague = as_user(factory::user::create_user(db).await?);
    let admin = as_user(factory::user::create_admin(db).await?);
    let scope = OwnerScope::Only(vec![owner.id]);

    let service = TransactionService::new(db);
    let update = |amount: f64| UpdateTransactionParams {
        id: transaction.id,
        amount: Some(amount),
        ..Default::default()
    };

    let denied = service.update(update(1.0), &colleague, &scope).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::NotCreator(_, _)))
    ));
    assert!(matches!(
        service.delete(transaction.id, &colleague, &scope).await,
        Err(AppError::AuthErr(AuthError::NotCreator(_, _)))
    ));

    let by_creator = service.update(update(2.0), &creator, &scope).await?.unwrap();
    assert_eq!(by_creator.amount, 2.0);

    let by_admin = service
        .update(update(3.0), &admin, &OwnerScope::All)
        .await?
        .unwrap();
    assert_eq!(by_admin.amount, 3.0);

    assert!(service.delete(transaction.id, &admin, &OwnerScope::All).await?);

    Ok(())
}

/// Tests that a transaction outside the scope reads as missing.
///
/// Expected: Ok(None) on update and Ok(false) on delete
#[tokio::test]
async fn treats_out_of_scope_as_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, _, _, transaction) =
        factory::helpers::create_transaction_with_dependencies(db).await?;
    let creator = as_user(creator);
    let scope = OwnerScope::Only(vec![]);

    let service = TransactionService::new(db);

    let updated = service
        .update(
            UpdateTransactionParams {
                id: transaction.id,
                amount: Some(5.0),
                ..Default::default()
            },
            &creator,
            &scope,
        )
        .await?;

    assert!(updated.is_none());
    assert!(!service.delete(transaction.id, &creator, &scope).await?);

    Ok(())
}

/// Tests an inverted date range.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_inverted_date_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TransactionService::new(db)
        .get_paginated(
            &OwnerScope::All,
            TransactionFilter {
                start_date: NaiveDate::from_ymd_opt(2025, 5, 1),
                end_date: NaiveDate::from_ymd_opt(2025, 4, 1),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests year and end date filters past the last representable day.
///
/// Expected: Err(AppError::Validation) for both instead of a database error
#[tokio::test]
async fn rejects_filters_outside_calendar_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TransactionService::new(db);

    let far_year = service
        .get_paginated(
            &OwnerScope::All,
            TransactionFilter {
                year: Some(300_000),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await;
    let last_day = service
        .get_paginated(
            &OwnerScope::All,
            TransactionFilter {
                end_date: Some(NaiveDate::MAX),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await;

    assert!(matches!(far_year, Err(AppError::Validation(_))));
    assert!(matches!(last_day, Err(AppError::Validation(_))));

    Ok(())
}
