use super::*;

/// Tests deleting an unused category.
///
/// Expected: Ok(true), then Ok(false) on a second delete
#[tokio::test]
async fn deletes_unused_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.delete(category.id).await?);
    assert!(!repo.delete(category.id).await?);

    Ok(())
}

/// Tests that a category referenced by transactions is protected.
///
/// Verifies that the restricting foreign key refuses the delete at the
/// database level.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn refuses_category_with_transactions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, category, _) = factory::helpers::create_transaction_with_dependencies(db).await?;

    let result = CategoryRepository::new(db).delete(category.id).await;

    assert!(result.is_err());

    Ok(())
}
