use super::*;
use crate::server::{
    model::{
        budget_owner::{CreateBudgetOwnerParams, UpdateBudgetOwnerParams},
        scope::OwnerScope,
    },
    service::budget_owner::BudgetOwnerService,
};

fn create_params(name: &str, code: Option<&str>) -> CreateBudgetOwnerParams {
    CreateBudgetOwnerParams {
        name: name.to_string(),
        code: code.map(str::to_string),
        description: None,
        status: Status::Active,
    }
}

/// Tests duplicate name and code detection.
///
/// Expected: Err(AppError::Duplicate) for a reused name and a reused code
#[tokio::test]
async fn rejects_duplicate_name_and_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BudgetOwnerService::new(db);
    service.create(create_params("Operations", Some("OPS"))).await?;

    let same_name = service.create(create_params("Operations", Some("OP2"))).await;
    let same_code = service.create(create_params("Ops Team", Some("OPS"))).await;

    assert!(matches!(same_name, Err(AppError::Duplicate(_))));
    assert!(matches!(same_code, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests that an owner can keep its own name and code on update.
///
/// Expected: Ok(Some) without a duplicate error
#[tokio::test]
async fn allows_unchanged_name_and_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BudgetOwnerService::new(db);
    let owner = service.create(create_params("Research", Some("RND"))).await?;

    let updated = service
        .update(UpdateBudgetOwnerParams {
            id: owner.id,
            name: Some("Research".to_string()),
            code: Some(Some("RND".to_string())),
            description: Some(Some("Labs".to_string())),
            status: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.description.as_deref(), Some("Labs"));

    Ok(())
}

/// Tests that an owner outside the caller's scope is hidden.
///
/// Expected: Ok(None) for the restricted scope, Ok(Some) for all owners
#[tokio::test]
async fn hides_owner_outside_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::budget_owner::create_budget_owner(db).await?;

    let service = BudgetOwnerService::new(db);

    assert!(service
        .get_by_id(owner.id, &OwnerScope::Only(vec![]))
        .await?
        .is_none());
    assert!(service
        .get_by_id(owner.id, &OwnerScope::All)
        .await?
        .is_some());

    Ok(())
}
