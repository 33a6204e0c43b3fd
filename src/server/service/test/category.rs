use super::*;
use crate::server::{
    model::category::{CreateCategoryParams, UpdateCategoryParams},
    service::category::CategoryService,
};

fn create_params(name: &str) -> CreateCategoryParams {
    CreateCategoryParams {
        name: name.to_string(),
        description: None,
        status: Status::Active,
    }
}

/// Tests that category names are unique ignoring case.
///
/// Expected: Err(AppError::Duplicate)
#[tokio::test]
async fn rejects_name_in_other_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    service.create(create_params("Travel")).await?;

    let result = service.create(create_params("  TRAVEL ")).await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests a name that differs only in case with a non-ASCII first letter.
///
/// Expected: Err(AppError::Duplicate) since the ASCII letters fold the same way
#[tokio::test]
async fn rejects_name_in_other_case_with_accented_letter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    service.create(create_params("ÉVENTS")).await?;

    let result = service.create(create_params("Évents")).await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests renaming a category to a different casing of its own name.
///
/// Expected: Ok(Some) with the new casing
#[tokio::test]
async fn allows_recasing_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let category = service.create(create_params("it equipment")).await?;

    let updated = service
        .update(UpdateCategoryParams {
            id: category.id,
            name: Some("IT Equipment".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "IT Equipment");

    Ok(())
}

/// Tests deleting a category that transactions reference.
///
/// Expected: Err(AppError::Validation) and the category still exists
#[tokio::test]
async fn refuses_delete_with_transactions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, category, _) = factory::helpers::create_transaction_with_dependencies(db).await?;

    let service = CategoryService::new(db);
    let result = service.delete(category.id).await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert_eq!(msg, "Cannot delete category with existing transactions");
        }
        other => panic!("Expected Validation error, got: {:?}", other),
    }
    assert!(service.get_by_id(category.id).await?.is_some());

    Ok(())
}
