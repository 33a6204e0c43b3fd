use super::*;
use crate::server::{
    model::{
        budget::{BudgetFilter, CreateBudgetParams, UpdateBudgetParams},
        pagination::PageRequest,
        scope::OwnerScope,
    },
    service::budget::BudgetService,
};
use chrono::{TimeZone, Utc};

/// Tests that an owner can only have one budget per year.
///
/// Expected: Err(AppError::Duplicate) for the second budget
#[tokio::test]
async fn rejects_second_budget_for_owner_year() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_admin(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;

    let params = CreateBudgetParams {
        budget_owner_id: owner.id,
        year: 2025,
        amount_planned: 1_000.0,
        amount_revised: None,
        created_by: user.id,
    };

    let service = BudgetService::new(db);
    service.create(params.clone()).await?;
    let result = service.create(params).await;

    match result {
        Err(AppError::Duplicate(msg)) => {
            assert_eq!(msg, "Budget already exists for this owner and year");
        }
        other => panic!("Expected Duplicate error, got: {:?}", other),
    }

    Ok(())
}

/// Tests budget creation validation.
///
/// Expected: Err(AppError::Validation) for a bad year or amount, and
/// Err(AppError::NotFound) for a missing owner
#[tokio::test]
async fn validates_new_budget() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_admin(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;

    let valid = CreateBudgetParams {
        budget_owner_id: owner.id,
        year: 2025,
        amount_planned: 1_000.0,
        amount_revised: None,
        created_by: user.id,
    };

    let service = BudgetService::new(db);

    let bad_year = service
        .create(CreateBudgetParams {
            year: 1999,
            ..valid.clone()
        })
        .await;
    let bad_amount = service
        .create(CreateBudgetParams {
            amount_planned: 0.0,
            ..valid.clone()
        })
        .await;
    let bad_revision = service
        .create(CreateBudgetParams {
            amount_revised: Some(-5.0),
            ..valid.clone()
        })
        .await;
    let missing_owner = service
        .create(CreateBudgetParams {
            budget_owner_id: 999,
            ..valid
        })
        .await;

    assert!(matches!(bad_year, Err(AppError::Validation(_))));
    assert!(matches!(bad_amount, Err(AppError::Validation(_))));
    assert!(matches!(bad_revision, Err(AppError::Validation(_))));
    assert!(matches!(missing_owner, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests utilization against the revised amount.
///
/// Verifies that spending only counts transactions of the budget year and
/// that the revised amount replaces the planned amount.
///
/// Expected: 250 spent of 1000 revised, 25% utilization, 750 remaining
#[tokio::test]
async fn computes_utilization_from_revised_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    let category = factory::category::create_category(db).await?;
    let budget = factory::budget::BudgetFactory::new(db, owner.id, user.id)
        .year(2025)
        .amount_planned(2_000.0)
        .amount_revised(Some(1_000.0))
        .build()
        .await?;

    for (date, amount) in [
        (Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(), 100.0),
        (Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(), 150.0),
        (Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap(), 500.0),
    ] {
        factory::transaction::TransactionFactory::new(db, owner.id, category.id, user.id)
            .date(date)
            .amount(amount)
            .build()
            .await?;
    }

    let result = BudgetService::new(db)
        .get_by_id(budget.id, &OwnerScope::All)
        .await?
        .unwrap();

    assert_eq!(result.utilization.effective_amount, 1_000.0);
    assert_eq!(result.utilization.spent, 250.0);
    assert_eq!(result.utilization.remaining, 750.0);
    assert_eq!(result.utilization.percentage, 25.0);
    assert_eq!(result.transaction_count, 2);

    Ok(())
}

/// Tests that budgets of owners outside the scope are hidden.
///
/// Expected: Ok(None) by ID, and an empty list when filtering on that owner
#[tokio::test]
async fn hides_budgets_outside_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, owner, budget) = factory::helpers::create_budget_with_dependencies(db).await?;
    let scope = OwnerScope::Only(vec![]);

    let service = BudgetService::new(db);

    assert!(service.get_by_id(budget.id, &scope).await?.is_none());

    let page = service
        .get_paginated(
            &scope,
            BudgetFilter {
                year: None,
                budget_owner_id: Some(owner.id),
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(page.total, 0);

    Ok(())
}

/// Tests the summary across visible budgets.
///
/// Expected: Totals over both budgets and the average of their percentages
#[tokio::test]
async fn summarizes_visible_budgets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::budget_owner::create_budget_owner(db).await?;
    let second = factory::budget_owner::create_budget_owner(db).await?;
    let hidden = factory::budget_owner::create_budget_owner(db).await?;
    let category = factory::category::create_category(db).await?;

    for owner_id in [first.id, second.id, hidden.id] {
        factory::budget::BudgetFactory::new(db, owner_id, user.id)
            .year(2025)
            .amount_planned(1_000.0)
            .build()
            .await?;
    }
    factory::transaction::TransactionFactory::new(db, first.id, category.id, user.id)
        .date(Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap())
        .amount(500.0)
        .build()
        .await?;

    let summary = BudgetService::new(db)
        .summary(&OwnerScope::Only(vec![first.id, second.id]), Some(2025))
        .await?;

    assert_eq!(summary.budget_count, 2);
    assert_eq!(summary.total_planned, 2_000.0);
    assert_eq!(summary.total_effective, 2_000.0);
    assert_eq!(summary.total_spent, 500.0);
    assert_eq!(summary.total_remaining, 1_500.0);
    assert_eq!(summary.average_utilization, 25.0);

    Ok(())
}

/// Tests updating a budget with a non-positive amount.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_non_positive_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, budget) = factory::helpers::create_budget_with_dependencies(db).await?;

    let result = BudgetService::new(db)
        .update(UpdateBudgetParams {
            id: budget.id,
            amount_planned: None,
            amount_revised: Some(Some(0.0)),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
