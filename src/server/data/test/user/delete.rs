use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a user.
///
/// Verifies that the user's access grants are removed with them.
///
/// Expected: Ok(true) and no remaining access rows
#[tokio::test]
async fn deletes_user_and_access() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    factory::user_access::create_user_access(db, user.id, owner.id).await?;

    let deleted = UserRepository::new(db).delete(user.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::UserAccess::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a user that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).delete(999).await?);

    Ok(())
}
